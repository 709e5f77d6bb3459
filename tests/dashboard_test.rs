use anyhow::Result;
use chrono::Utc;
use fitdesk_cli::api::ApiClient;
use fitdesk_cli::commands::DashboardStats;
use fitdesk_cli::config::Config;
use fitdesk_cli::session::Session;

fn api_against(base_url: &str) -> ApiClient {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();

    let mut session = Session::default();
    session.token = Some("tok".to_string());

    ApiClient::new(&config, session).unwrap()
}

#[tokio::test]
async fn test_dashboard_stats_from_fetched_slices() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/api/v1/clients")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
                    "name": "Ada Lovelace",
                    "email": null,
                    "phone": null,
                    "status": "active",
                    "membership_start": null,
                    "membership_end": null,
                    "notes": null,
                    "created_at": "2024-01-15T10:00:00Z"
                },
                {
                    "id": "1b2c3d4e-5f6a-4b7c-8d9e-0f1a2b3c4d5e",
                    "name": "Grace Hopper",
                    "email": null,
                    "phone": null,
                    "status": "inactive",
                    "membership_start": null,
                    "membership_end": null,
                    "notes": null,
                    "created_at": "2024-02-20T09:30:00Z"
                }
            ]"#,
        )
        .create_async()
        .await;

    server
        .mock("GET", "/api/v1/payments")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "b47ac10b-58cc-4372-a567-0e02b2c3d479",
                    "client_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
                    "amount": 50.0,
                    "status": "pending",
                    "due_date": "2024-03-01",
                    "paid_date": null,
                    "method": null,
                    "notes": null
                },
                {
                    "id": "c47ac10b-58cc-4372-a567-0e02b2c3d480",
                    "client_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
                    "amount": 75.5,
                    "status": "pending",
                    "due_date": null,
                    "paid_date": null,
                    "method": null,
                    "notes": null
                },
                {
                    "id": "d47ac10b-58cc-4372-a567-0e02b2c3d481",
                    "client_id": "1b2c3d4e-5f6a-4b7c-8d9e-0f1a2b3c4d5e",
                    "amount": 100.0,
                    "status": "completed",
                    "due_date": null,
                    "paid_date": "2024-02-15",
                    "method": "card",
                    "notes": null
                }
            ]"#,
        )
        .create_async()
        .await;

    server
        .mock("GET", "/api/v1/bookings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "e47ac10b-58cc-4372-a567-0e02b2c3d482",
                    "client_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
                    "starts_at": "2099-06-01T10:00:00Z",
                    "ends_at": "2099-06-01T11:00:00Z",
                    "status": "scheduled",
                    "notes": null
                },
                {
                    "id": "f47ac10b-58cc-4372-a567-0e02b2c3d483",
                    "client_id": "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
                    "starts_at": "2020-01-01T10:00:00Z",
                    "ends_at": "2020-01-01T11:00:00Z",
                    "status": "completed",
                    "notes": null
                }
            ]"#,
        )
        .create_async()
        .await;

    let api = api_against(&server.url());

    let clients = api.list_clients().await?;
    let payments = api.list_all_payments().await?;
    let bookings = api.list_bookings().await?;

    let stats = DashboardStats::compute(&clients, &payments, &bookings, Utc::now());

    assert_eq!(stats.total_clients, 2);
    assert_eq!(stats.active_clients, 1);
    assert_eq!(stats.pending_payments, 2);
    assert_eq!(stats.pending_amount, 125.5);
    assert_eq!(stats.upcoming_bookings, 1);
    Ok(())
}
