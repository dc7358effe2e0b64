//! REST API Wrappers
//!
//! Frontend bindings to the survey backend. Each function performs one
//! HTTP call against the fixed base path and decodes the JSON payload.
//! Transport and non-2xx failures surface as the error string.

use reqwest::Client;

use crate::models::{Credentials, NewSurvey, Survey, TokenResponse};

const API_URL: &str = "http://127.0.0.1:5000/api";

// ========================
// Survey Endpoints
// ========================

pub async fn fetch_surveys() -> Result<Vec<Survey>, String> {
    reqwest::get(format!("{API_URL}/surveys/"))
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_survey(survey_id: u32) -> Result<Survey, String> {
    reqwest::get(format!("{API_URL}/surveys/{survey_id}/"))
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Submit the response carried by `survey` (its questions' selected choices).
pub async fn save_survey_response(survey: &Survey) -> Result<(), String> {
    Client::new()
        .put(format!("{API_URL}/surveys/{}/", survey.id))
        .json(survey)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Create a survey. Creation is the one call requiring a bearer token.
pub async fn post_new_survey(survey: &NewSurvey, token: &str) -> Result<Survey, String> {
    Client::new()
        .post(format!("{API_URL}/surveys/"))
        .bearer_auth(token)
        .json(survey)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

// ========================
// Auth Endpoints
// ========================

pub async fn authenticate(credentials: &Credentials) -> Result<TokenResponse, String> {
    post_credentials("login", credentials).await
}

pub async fn register(credentials: &Credentials) -> Result<TokenResponse, String> {
    post_credentials("register", credentials).await
}

async fn post_credentials(
    endpoint: &str,
    credentials: &Credentials,
) -> Result<TokenResponse, String> {
    Client::new()
        .post(format!("{API_URL}/{endpoint}/"))
        .json(credentials)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}
