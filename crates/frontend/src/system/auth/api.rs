use contracts::system::auth::{ErrorBody, LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use super::provider::AuthError;
use crate::shared::api::ApiError;
use crate::shared::api_utils::api_url;

/// Login with username and password. The session lives in a server cookie.
pub async fn login(base_url: &str, username: String, password: String) -> Result<UserInfo, AuthError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url(base_url, "/login"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match response.status() {
        200..=299 => {}
        400 | 401 => {
            // the server explains the rejection in `{ "error": ... }`
            let reason = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_else(|_| "Неверный логин или пароль".to_string());
            return Err(AuthError::Rejected(reason));
        }
        status => return Err(ApiError::Http { status }.into()),
    }

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(body.user)
}

/// Logout (drop the server session)
pub async fn logout(base_url: &str) -> Result<(), AuthError> {
    let response = Request::post(&api_url(base_url, "/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        }
        .into());
    }
    Ok(())
}
