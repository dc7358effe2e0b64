//! Store Actions
//!
//! Async wrappers around the API client: each action performs the remote
//! call, then commits the result through a store mutation. Auth actions
//! swallow their errors; they log to the console and broadcast on the
//! event bus so the login view stays in charge of display.

use leptos::prelude::*;
use web_sys::console;

use crate::api;
use crate::context::{AppContext, AuthEvent};
use crate::models::{Credentials, NewSurvey, Survey, User};
use crate::store::{
    store_set_jwt_token, store_set_survey, store_set_surveys, store_set_user_data, AppStore,
    AppStateStoreFields,
};

pub async fn load_surveys(store: AppStore) -> Result<(), String> {
    let surveys = api::fetch_surveys().await?;
    store_set_surveys(&store, surveys);
    Ok(())
}

pub async fn load_survey(store: AppStore, id: u32) -> Result<(), String> {
    let survey = api::fetch_survey(id).await?;
    store_set_survey(&store, survey);
    Ok(())
}

/// Submit the choices recorded on the current survey
pub async fn add_survey_response(store: AppStore) -> Result<(), String> {
    let survey = store
        .current_survey()
        .get_untracked()
        .ok_or_else(|| "no survey loaded".to_string())?;
    api::save_survey_response(&survey).await
}

pub async fn submit_new_survey(store: AppStore, survey: NewSurvey) -> Result<Survey, String> {
    let token = store.jwt().get_untracked();
    api::post_new_survey(&survey, &token).await
}

/// Returns true when the user ends up signed in
pub async fn login(store: AppStore, ctx: AppContext, credentials: Credentials) -> bool {
    store_set_user_data(&store, User { email: credentials.email.clone() });
    match api::authenticate(&credentials).await {
        Ok(resp) => {
            store_set_jwt_token(&store, resp.token);
            true
        }
        Err(err) => {
            console::error_1(&format!("Error authenticating: {err}").into());
            ctx.broadcast(AuthEvent::FailedAuthentication(err));
            false
        }
    }
}

/// Returns true when registration signed the user in
pub async fn register(store: AppStore, ctx: AppContext, credentials: Credentials) -> bool {
    match api::register(&credentials).await {
        Ok(resp) => {
            store_set_user_data(&store, User { email: credentials.email.clone() });
            store_set_jwt_token(&store, resp.token);
            true
        }
        Err(err) => {
            console::error_1(&format!("Error registering: {err}").into());
            ctx.broadcast(AuthEvent::FailedRegistering(err));
            false
        }
    }
}
