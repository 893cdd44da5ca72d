//! Server integration tests.
//!
//! These tests verify the server starts correctly and handles requests.

mod common;

use anyhow::Result;

#[tokio::test]
async fn test_server_starts_and_responds_to_health() -> Result<()> {
    let server = common::TestServer::start().await?;

    assert!(server.health().await?, "Server should be healthy");

    Ok(())
}

#[tokio::test]
async fn test_server_health_returns_version() -> Result<()> {
    let server = common::TestServer::start().await?;

    let resp = server.get("/health").send().await?;
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["status"], "ok");
    assert!(body.get("version").is_some());
    assert_eq!(body["notes"], 0);

    Ok(())
}

#[tokio::test]
async fn test_multiple_servers_have_independent_stores() -> Result<()> {
    let server1 = common::TestServer::start().await?;
    let server2 = common::TestServer::start().await?;

    assert_ne!(server1.addr, server2.addr);

    let resp = server1
        .post("/notes")
        .body(r#"{"id":"only-here","content":"x"}"#)
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 201);

    assert_eq!(server1.get("/notes/only-here").send().await?.status().as_u16(), 200);
    assert_eq!(server2.get("/notes/only-here").send().await?.status().as_u16(), 404);

    Ok(())
}

#[tokio::test]
async fn test_wrong_method_is_rejected() -> Result<()> {
    let server = common::TestServer::start().await?;

    let resp = server.delete("/notes").send().await?;
    assert_eq!(resp.status().as_u16(), 405);

    Ok(())
}

#[tokio::test]
async fn test_bind_failure_is_reported() -> Result<()> {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = occupied.local_addr()?;

    let err = match common::TestServer::start_on(addr).await {
        Ok(_) => anyhow::bail!("server should not bind an occupied port"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("Failed to bind"), "error: {err}");

    Ok(())
}
