use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::models::{Client, ClientStatus};

/// Create/update payload for a client record
#[derive(Debug, Default, Serialize)]
pub struct ClientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_start: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_end: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApiClient {
    /// List the trainer's clients
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        self.require_auth()?;
        self.get_json("/api/v1/clients").await
    }

    /// Fetch a single client
    pub async fn get_client(&self, id: Uuid) -> Result<Client> {
        self.require_auth()?;
        self.get_json(&format!("/api/v1/clients/{}", id)).await
    }

    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client> {
        self.require_auth()?;
        self.post_json("/api/v1/clients", payload).await
    }

    pub async fn update_client(&self, id: Uuid, payload: &ClientPayload) -> Result<Client> {
        self.require_auth()?;
        self.put_json(&format!("/api/v1/clients/{}", id), payload).await
    }

    pub async fn delete_client(&self, id: Uuid) -> Result<()> {
        self.require_auth()?;
        self.delete(&format!("/api/v1/clients/{}", id)).await
    }
}

/// In-memory client list used as a read-through cache.
///
/// Detail views resolve a client from the already-fetched roster when
/// possible and fall back to a single network fetch otherwise.
#[derive(Default)]
pub struct ClientCache {
    clients: Option<Vec<Client>>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with an already-fetched roster
    pub fn from_list(clients: Vec<Client>) -> Self {
        Self {
            clients: Some(clients),
        }
    }

    /// Resolve a client by id: cache hit first, network fetch as fallback
    pub async fn resolve(&mut self, api: &ApiClient, id: Uuid) -> Result<Client> {
        if let Some(clients) = &self.clients {
            if let Some(client) = clients.iter().find(|c| c.id == id) {
                return Ok(client.clone());
            }
        }

        api.get_client(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_client(name: &str) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: None,
            phone: None,
            status: ClientStatus::Active,
            membership_start: None,
            membership_end: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_cache_hit_avoids_network() {
        let client = sample_client("Ada");
        let id = client.id;
        let mut cache = ClientCache::from_list(vec![client]);

        // Unroutable base URL: a cache hit must not touch it
        let mut config = crate::config::Config::default();
        config.api.base_url = "http://127.0.0.1:1".to_string();
        let api = ApiClient::new(&config, {
            let mut s = crate::session::Session::default();
            s.token = Some("tok".to_string());
            s
        })
        .unwrap();

        let resolved = cache.resolve(&api, id).await.unwrap();
        assert_eq!(resolved.name, "Ada");
    }

    #[test]
    fn test_payload_skips_unset_fields() {
        let payload = ClientPayload {
            name: Some("Ada".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Ada"}"#);
    }
}
