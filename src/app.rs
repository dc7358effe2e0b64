//! Survey SPA App
//!
//! Root component: global store/context setup and the route table.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::auth;
use crate::components::{Home, Login, NewSurveyForm, SurveyView};
use crate::context::AppContext;
use crate::store::{is_authenticated, use_app_store, AppState, AppStateStoreFields};

/// Where unauthenticated visitors get sent
const LOGIN_PATH: &str = "/login";

/// Guard decision for the survey-builder route
fn login_redirect(authenticated: bool) -> Option<&'static str> {
    if authenticated {
        None
    } else {
        Some(LOGIN_PATH)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(signal(None)));

    // A token from a previous visit keeps the user signed in
    if let Some(token) = auth::load_token() {
        store.jwt().set(token);
    }

    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| "Not Found">
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/surveys/:id") view=SurveyView/>
                    <Route path=path!("/surveys") view=NewSurveyGate/>
                    <Route path=path!("/login") view=Login/>
                </Routes>
            </main>
        </Router>
    }
}

/// Redirects to the login view unless the stored token authenticates
#[component]
fn NewSurveyGate() -> impl IntoView {
    let store = use_app_store();
    move || match login_redirect(is_authenticated(&store)) {
        Some(path) => view! { <Redirect path=path/> }.into_any(),
        None => view! { <NewSurveyForm/> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_visit_redirects_to_login() {
        assert_eq!(login_redirect(false), Some("/login"));
    }

    #[test]
    fn test_authenticated_visit_passes() {
        assert_eq!(login_redirect(true), None);
    }
}
