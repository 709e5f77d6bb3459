use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::models::User;

/// Login request payload
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request payload
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response to a successful login or signup
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// Login and persist the returned token plus user to the session file
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        tracing::debug!("Logging in as {}", email);

        let response: AuthResponse = self.post_json("/api/v1/auth/login", &request).await?;

        self.with_session(|session| {
            session.set(response.token.clone(), response.user.clone());
            session.save()
        })?;

        tracing::info!("Successfully logged in as {}", response.user.email);
        Ok(response)
    }

    /// Create a trainer account and persist the resulting session
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let request = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        tracing::debug!("Signing up as {}", email);

        let response: AuthResponse = self.post_json("/api/v1/auth/signup", &request).await?;

        self.with_session(|session| {
            session.set(response.token.clone(), response.user.clone());
            session.save()
        })?;

        tracing::info!("Account created for {}", response.user.email);
        Ok(response)
    }

    /// Get the current user from the server
    pub async fn me(&self) -> Result<User> {
        self.require_auth()?;
        self.get_json("/api/v1/auth/me").await
    }
}
