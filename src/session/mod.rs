// Persisted login session: auth token plus the cached user record,
// stored as JSON under the config directory. This is the only durable
// state the client keeps besides its settings file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::User;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Session {
    /// Default session file path (~/.fitdesk/session.json)
    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("session.json"))
    }

    /// Load the session from the default location. A missing file means
    /// the user is logged out, not an error.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load a session from an explicit path (tests use a tempdir here)
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let mut session = if path.exists() {
            let contents = fs::read_to_string(&path).context("Failed to read session file")?;
            serde_json::from_str(&contents).context("Failed to parse session file")?
        } else {
            Self::default()
        };

        session.path = Some(path);
        Ok(session)
    }

    /// Create an empty session bound to an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self {
            token: None,
            user: None,
            path: Some(path),
        }
    }

    /// Persist the session
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize session")?;
        fs::write(&path, contents).context("Failed to write session file")?;

        Ok(())
    }

    /// Check if a token is stored
    pub fn is_authenticated(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Store a fresh token and user after login/signup
    pub fn set(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the token and cached user
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserType};
    use tempfile::tempdir;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jamie Trainer".to_string(),
            email: "jamie@example.com".to_string(),
            user_type: UserType::Trainer,
            subscription_status: Some("active".to_string()),
        }
    }

    #[test]
    fn test_missing_file_is_logged_out() -> Result<()> {
        let dir = tempdir()?;
        let session = Session::load_from(dir.path().join("session.json"))?;

        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.json");

        let mut session = Session::at(path.clone());
        session.set("tok-123".to_string(), test_user());
        session.save()?;

        let loaded = Session::load_from(path)?;
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.token.as_deref(), Some("tok-123"));
        assert_eq!(loaded.user.unwrap().email, "jamie@example.com");
        Ok(())
    }

    #[test]
    fn test_clear_removes_token() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.json");

        let mut session = Session::at(path.clone());
        session.set("tok-123".to_string(), test_user());
        session.save()?;

        session.clear();
        session.save()?;

        let loaded = Session::load_from(path)?;
        assert!(!loaded.is_authenticated());
        assert!(loaded.user.is_none());
        Ok(())
    }
}
