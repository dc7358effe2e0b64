//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. State changes
//! go through the `store_*` helpers below so every commit stays a plain
//! synchronous assignment.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth;
use crate::models::{Survey, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All surveys known to the client
    pub surveys: Vec<Survey>,
    /// Survey currently being viewed/answered
    pub current_survey: Option<Survey>,
    /// Signed-in user, if any
    pub user: Option<User>,
    /// Raw JWT; empty until a sign-in succeeds
    pub jwt: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Mutations
// ========================

/// Replace the survey list with a fresh payload
pub fn store_set_surveys(store: &AppStore, surveys: Vec<Survey>) {
    store.surveys().set(surveys);
}

/// Install a survey as current, with no choice selected on any question
pub fn store_set_survey(store: &AppStore, mut survey: Survey) {
    survey.clear_choices();
    store.current_survey().set(Some(survey));
}

/// Record the selected choice for one question of the current survey
pub fn store_set_choice(store: &AppStore, question_id: u32, choice_id: u32) {
    if let Some(survey) = store.current_survey().write().as_mut() {
        survey.set_choice(question_id, choice_id);
    }
}

/// Remember who is signing in
pub fn store_set_user_data(store: &AppStore, user: User) {
    store.user().set(Some(user));
}

/// Install a fresh token and persist it across reloads
pub fn store_set_jwt_token(store: &AppStore, token: String) {
    auth::save_token(&token);
    store.jwt().set(token);
}

// ========================
// Getters
// ========================

/// Whether the stored token still authenticates the user
pub fn is_authenticated(store: &AppStore) -> bool {
    auth::is_valid_jwt(&store.jwt().read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, Question};

    fn make_survey(id: u32) -> Survey {
        Survey {
            id,
            name: format!("Survey {}", id),
            created_at: "2017-12-01 00:00:00".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    text: "First question".to_string(),
                    choices: vec![
                        Choice { id: 1, text: "A".to_string(), selected: 0 },
                        Choice { id: 2, text: "B".to_string(), selected: 0 },
                    ],
                    choice: None,
                },
                Question {
                    id: 2,
                    text: "Second question".to_string(),
                    choices: vec![
                        Choice { id: 5, text: "A".to_string(), selected: 0 },
                        Choice { id: 6, text: "B".to_string(), selected: 0 },
                    ],
                    choice: None,
                },
            ],
        }
    }

    #[test]
    fn test_set_surveys_replaces_list() {
        let store = Store::new(AppState::default());
        store_set_surveys(&store, vec![make_survey(1), make_survey(2)]);
        store_set_surveys(&store, vec![make_survey(3)]);
        let surveys = store.surveys().get();
        assert_eq!(surveys.len(), 1);
        assert_eq!(surveys[0].id, 3);
    }

    #[test]
    fn test_set_survey_resets_choices() {
        let store = Store::new(AppState::default());
        let mut survey = make_survey(1);
        survey.questions[0].choice = Some(2);
        store_set_survey(&store, survey);
        let current = store.current_survey().get().unwrap();
        assert!(current.questions.iter().all(|q| q.choice.is_none()));
    }

    #[test]
    fn test_set_choice_touches_one_question() {
        let store = Store::new(AppState::default());
        store_set_survey(&store, make_survey(1));
        store_set_choice(&store, 2, 6);
        let current = store.current_survey().get().unwrap();
        assert_eq!(current.questions[0].choice, None);
        assert_eq!(current.questions[1].choice, Some(6));
    }

    #[test]
    fn test_set_choice_without_current_survey_is_noop() {
        let store = Store::new(AppState::default());
        store_set_choice(&store, 1, 1);
        assert!(store.current_survey().get().is_none());
    }

    #[test]
    fn test_empty_jwt_is_unauthenticated() {
        let store = Store::new(AppState::default());
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn test_unexpired_jwt_authenticates() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine as _;

        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"exp":99999999999}"#);
        let store = Store::new(AppState::default());
        store.jwt().set(format!("{header}.{payload}.signature"));
        assert!(is_authenticated(&store));
    }
}
