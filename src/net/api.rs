//! REST API helpers for the storefront auth endpoints.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds and tests: stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! login shows a message rather than tearing down the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn parse_token_response(raw: &str) -> Result<String, String> {
    let body: TokenResponse = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if body.token.is_empty() {
        return Err("server returned an empty token".to_owned());
    }
    Ok(body.token)
}

/// Validate login/register form input, returning trimmed credentials.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response carries
/// no token.
pub async fn login(credentials: &Credentials) -> Result<String, String> {
    post_for_token(LOGIN_ENDPOINT, "login", credentials).await
}

/// Create an account via `POST /api/auth/register` and return its token.
///
/// # Errors
///
/// Returns an error string if the request fails or the response carries
/// no token.
pub async fn register(credentials: &Credentials) -> Result<String, String> {
    post_for_token(REGISTER_ENDPOINT, "register", credentials).await
}

async fn post_for_token(endpoint: &str, action: &str, credentials: &Credentials) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(action, resp.status()));
        }
        let raw = resp.text().await.map_err(|e| e.to_string())?;
        parse_token_response(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, action, credentials);
        Err("not available on server".to_owned())
    }
}
