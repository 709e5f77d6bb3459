use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::Config;
use crate::session::Session;

mod error;

pub mod analytics;
pub mod auth;
pub mod bookings;
pub mod clients;
pub mod goals;
pub mod logs;
pub mod payments;
pub mod progress;
pub mod trainers;
pub mod workouts;

pub use clients::ClientCache;
pub use error::ApiError;

/// HTTP client for the FitDesk backend.
///
/// Wraps the configured base URL and the stored session; every request
/// carries `Authorization: Token <value>` when a token is present. Each
/// call is a single attempt, there is no retry policy.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<Mutex<Session>>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds);

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session: Arc::new(Mutex::new(session)),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn token(&self) -> Result<Option<String>> {
        let session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("Session state lock poisoned"))?;

        Ok(session.token.clone())
    }

    /// Run a closure against the stored session (used by the auth service
    /// to persist or clear tokens)
    pub(crate) fn with_session(&self, f: impl FnOnce(&mut Session) -> Result<()>) -> Result<()> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("Session state lock poisoned"))?;

        f(&mut session)
    }

    pub(crate) fn require_auth(&self) -> Result<()> {
        if self.token()?.is_none() {
            return Err(anyhow::anyhow!("Not logged in"));
        }
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let mut builder = self.http.request(method, self.url(path));

        if let Some(token) = self.token()? {
            builder = builder.header("Authorization", format!("Token {}", token));
        }

        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, path)?
            .send()
            .await
            .context("Failed to send GET request")?;

        Self::parse_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, path)?
            .json(body)
            .send()
            .await
            .context("Failed to send POST request")?;

        Self::parse_json(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::PUT, path)?
            .json(body)
            .send()
            .await
            .context("Failed to send PUT request")?;

        Self::parse_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, path)?
            .send()
            .await
            .context("Failed to send DELETE request")?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body).into())
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.context("Failed to parse API response")
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let config = Config::default();
        let client = ApiClient::new(&config, Session::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_poisoned_session_lock_is_an_error() {
        let client = ApiClient::new(&Config::default(), Session::default()).unwrap();

        let session = client.session.clone();
        let _ = std::thread::spawn(move || {
            let _guard = session.lock().unwrap();
            panic!("poison the session lock");
        })
        .join();

        assert!(client.token().is_err());
        assert!(client.require_auth().is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:8000/".to_string();

        let client = ApiClient::new(&config, Session::default()).unwrap();
        assert_eq!(client.url("/api/v1/clients"), "http://localhost:8000/api/v1/clients");
    }
}
