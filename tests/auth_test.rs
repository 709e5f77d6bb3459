use anyhow::Result;
use fitdesk_cli::api::ApiClient;
use fitdesk_cli::config::Config;
use fitdesk_cli::session::Session;
use tempfile::tempdir;

fn api_against(base_url: &str, session: Session) -> ApiClient {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();

    ApiClient::new(&config, session).unwrap()
}

fn user_json() -> &'static str {
    r#"{
        "id": "6f9b2b6e-0f4e-4f9a-9e1c-3d1f7b2a5c01",
        "name": "Jamie Trainer",
        "email": "jamie@example.com",
        "user_type": "trainer",
        "subscription_status": "active"
    }"#
}

#[tokio::test]
async fn test_login_persists_session() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/v1/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"token": "tok-abc123", "user": {}}}"#,
            user_json()
        ))
        .create_async()
        .await;

    let dir = tempdir()?;
    let session_path = dir.path().join("session.json");
    let api = api_against(&server.url(), Session::at(session_path.clone()));

    let response = api.login("jamie@example.com", "hunter2").await?;
    assert_eq!(response.token, "tok-abc123");
    assert_eq!(response.user.email, "jamie@example.com");

    // The token and user must survive a reload from disk
    let loaded = Session::load_from(session_path)?;
    assert!(loaded.is_authenticated());
    assert_eq!(loaded.token.as_deref(), Some("tok-abc123"));
    assert_eq!(loaded.user.unwrap().name, "Jamie Trainer");

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_login_surfaces_server_message() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/api/v1/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Invalid credentials"}"#)
        .create_async()
        .await;

    let dir = tempdir()?;
    let api = api_against(&server.url(), Session::at(dir.path().join("session.json")));

    let err = api
        .login("jamie@example.com", "wrong")
        .await
        .expect_err("login should fail");

    assert!(err.to_string().contains("Invalid credentials"));
    Ok(())
}

#[tokio::test]
async fn test_login_falls_back_to_status_reason() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/api/v1/auth/login")
        .with_status(401)
        .with_body("")
        .create_async()
        .await;

    let dir = tempdir()?;
    let api = api_against(&server.url(), Session::at(dir.path().join("session.json")));

    let err = api
        .login("jamie@example.com", "wrong")
        .await
        .expect_err("login should fail");

    assert!(err.to_string().contains("Unauthorized"));
    Ok(())
}

#[tokio::test]
async fn test_me_requires_token() -> Result<()> {
    let server = mockito::Server::new_async().await;
    let api = api_against(&server.url(), Session::default());

    let err = api.me().await.expect_err("me should fail when logged out");
    assert_eq!(err.to_string(), "Not logged in");
    Ok(())
}

#[tokio::test]
async fn test_requests_carry_token_scheme() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/v1/auth/me")
        .match_header("authorization", "Token tok-abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_json())
        .create_async()
        .await;

    let mut session = Session::default();
    session.token = Some("tok-abc123".to_string());
    let api = api_against(&server.url(), session);

    let user = api.me().await?;
    assert_eq!(user.email, "jamie@example.com");

    mock.assert_async().await;
    Ok(())
}
