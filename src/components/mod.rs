//! UI Components
//!
//! One Leptos component per routed view.

mod home;
mod login;
mod new_survey;
mod survey;

pub use home::Home;
pub use login::Login;
pub use new_survey::NewSurveyForm;
pub use survey::SurveyView;
