use anyhow::Result;
use fitdesk_cli::api::{ApiClient, ClientCache};
use fitdesk_cli::config::Config;
use fitdesk_cli::detail::ClientDetail;
use fitdesk_cli::session::Session;
use uuid::Uuid;

const CLIENT_ID: &str = "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d";

fn api_against(base_url: &str) -> ApiClient {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();

    let mut session = Session::default();
    session.token = Some("tok".to_string());

    ApiClient::new(&config, session).unwrap()
}

fn client_json() -> String {
    format!(
        r#"{{
            "id": "{}",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": null,
            "status": "active",
            "membership_start": "2024-01-01",
            "membership_end": null,
            "notes": null,
            "created_at": "2024-01-15T10:00:00Z"
        }}"#,
        CLIENT_ID
    )
}

fn payments_json() -> String {
    format!(
        r#"[{{
            "id": "b47ac10b-58cc-4372-a567-0e02b2c3d479",
            "client_id": "{}",
            "amount": 75.5,
            "status": "pending",
            "due_date": "2024-02-01",
            "paid_date": null,
            "method": null,
            "notes": null
        }}]"#,
        CLIENT_ID
    )
}

/// A failing sub-resource degrades to an empty slice; the others still load.
#[tokio::test]
async fn test_partial_failure_keeps_view_alive() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let base = format!("/api/v1/clients/{}", CLIENT_ID);

    server
        .mock("GET", format!("{}/goals", base).as_str())
        .with_status(500)
        .with_body(r#"{"error": "database exploded"}"#)
        .create_async()
        .await;

    for path in ["workout-plans", "logs", "measurements"] {
        server
            .mock("GET", format!("{}/{}", base, path).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;
    }

    server
        .mock("GET", format!("{}/payments", base).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payments_json())
        .create_async()
        .await;

    server
        .mock("GET", base.as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(client_json())
        .create_async()
        .await;

    let api = api_against(&server.url());
    let mut cache = ClientCache::new();
    let id = Uuid::parse_str(CLIENT_ID)?;

    let detail = ClientDetail::load(&api, &mut cache, id).await?;

    assert_eq!(detail.client.name, "Ada Lovelace");
    assert!(detail.goals.is_empty());
    assert_eq!(detail.payments.len(), 1);
    assert_eq!(detail.payments[0].amount, 75.5);
    Ok(())
}

/// A missing client record blocks the whole view with a "not found" message.
#[tokio::test]
async fn test_unknown_client_fails_load() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();

    server
        .mock("GET", format!("/api/v1/clients/{}", id).as_str())
        .with_status(404)
        .with_body(r#"{"error": "No such client"}"#)
        .create_async()
        .await;

    let api = api_against(&server.url());
    let mut cache = ClientCache::new();

    let err = ClientDetail::load(&api, &mut cache, id)
        .await
        .expect_err("load should fail");
    assert_eq!(err.to_string(), format!("Client {} not found", id));
    Ok(())
}

/// A server failure on the client fetch keeps its own message instead of
/// being mislabeled as "not found".
#[tokio::test]
async fn test_client_fetch_server_error_keeps_message() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();

    server
        .mock("GET", format!("/api/v1/clients/{}", id).as_str())
        .with_status(500)
        .with_body(r#"{"error": "database exploded"}"#)
        .create_async()
        .await;

    let api = api_against(&server.url());
    let mut cache = ClientCache::new();

    let err = ClientDetail::load(&api, &mut cache, id)
        .await
        .expect_err("load should fail");

    let message = format!("{:#}", err);
    assert!(message.contains("database exploded"));
    assert!(!message.contains("not found"));
    Ok(())
}

/// A roster hit resolves the client without a per-id fetch.
#[tokio::test]
async fn test_roster_hit_skips_client_fetch() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let base = format!("/api/v1/clients/{}", CLIENT_ID);

    // No mock for GET /api/v1/clients/{id}: a cache miss would 501
    for path in ["goals", "workout-plans", "logs", "payments", "measurements"] {
        server
            .mock("GET", format!("{}/{}", base, path).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;
    }

    let client: fitdesk_cli::models::Client = serde_json::from_str(&client_json())?;
    let api = api_against(&server.url());
    let mut cache = ClientCache::from_list(vec![client]);
    let id = Uuid::parse_str(CLIENT_ID)?;

    let detail = ClientDetail::load(&api, &mut cache, id).await?;
    assert_eq!(detail.client.name, "Ada Lovelace");
    Ok(())
}
