//! REST client for the tracking backend.
//!
//! Thin wrapper over `reqwest`: attaches the token credential to every
//! request, maps 401 to a hard session reset, and digs the structured
//! `detail` message out of error bodies so dialogs can show it verbatim.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::session::SessionContext;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user_id: i64,
    username: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ApiClient {
    /// `base_url` includes the `/api` prefix, e.g. `http://host:8000/api`.
    pub fn new(base_url: impl Into<String>, session: Arc<SessionContext>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// POST `login/`; installs the returned credential into the session
    /// context. A 401 here means bad credentials, not an expired session,
    /// so it surfaces as a plain backend error.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AppError> {
        let url = self.url("login/");
        let body = serde_json::json!({ "username": username, "password": password });
        let resp = self.http.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = extract_detail(&resp.text().await.unwrap_or_default());
            return Err(AppError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let login: LoginResponse = resp.json().await?;
        log::info!("Logged in as {}", login.username);
        self.session
            .begin(login.token, login.user_id, login.username);
        Ok(())
    }

    /// Forget the credential without talking to the backend (token auth
    /// has no server-side logout).
    pub fn logout(&self) {
        self.session.clear();
    }

    // -----------------------------------------------------------------
    // JSON verb helpers used by the typed resource methods
    // -----------------------------------------------------------------

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let resp = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let resp = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Attach the credential, send, and normalize the response status.
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let request = match self.session.token() {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        };
        let resp = request.send().await?;
        self.check(resp).await
    }

    async fn check(&self, resp: Response) -> Result<Response, AppError> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            // Not locally recoverable: discard the credential and let the
            // consumer route back to the login view.
            log::warn!("Backend returned 401, resetting session");
            self.session.clear();
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            let detail = extract_detail(&resp.text().await.unwrap_or_default());
            log::error!("Backend error {}: {}", status.as_u16(), detail);
            return Err(AppError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(resp)
    }
}

/// Pull a human-readable message out of an error body: a structured
/// `detail` (or `error`) field when present, the raw body otherwise.
fn extract_detail(body: &str) -> String {
    let structured = serde_json::from_str::<serde_json::Value>(body).ok().and_then(|v| {
        v.get("detail")
            .or_else(|| v.get("error"))
            .and_then(|d| d.as_str().map(String::from))
    });
    match structured {
        Some(msg) => msg,
        None if body.trim().is_empty() => "Request failed".to_string(),
        None => body.trim().to_string(),
    }
}
