//! Common test utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use notekeep_server::{AppState, Server, ServerConfig, ServerError};

/// A test server that runs in the background.
pub struct TestServer {
    /// The server's address.
    pub addr: SocketAddr,
    /// HTTP client configured for this server.
    pub client: Client,
    /// Application state, for inspecting the store directly.
    pub state: AppState,
    /// Stops the server when sent (or dropped).
    _shutdown: oneshot::Sender<()>,
    /// Handle to the server task.
    _handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    /// Start a new test server with default configuration.
    pub async fn start() -> Result<Self> {
        let addr = find_available_port().await?;
        Self::start_on(addr).await
    }

    /// Start a test server on a specific address.
    ///
    /// Fails as soon as the server task exits, so bind errors surface directly.
    pub async fn start_on(addr: SocketAddr) -> Result<Self> {
        let config = ServerConfig::new()
            .with_bind_address(addr)
            .with_request_logging(false);
        let state = AppState::new(config);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = Server::from_state(state.clone());
        let mut handle = tokio::spawn(async move {
            server
                .run_with_shutdown(addr, async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        let client = Client::new();
        tokio::select! {
            ready = wait_for_server(&client, addr) => ready?,
            exited = &mut handle => match exited? {
                Err(e) => anyhow::bail!("Test server failed: {}", e),
                Ok(()) => anyhow::bail!("Test server exited before becoming ready"),
            },
        }

        Ok(Self {
            addr,
            client,
            state,
            _shutdown: shutdown_tx,
            _handle: handle,
        })
    }

    /// Get the base URL for the server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// GET request builder.
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}{}", self.base_url(), path))
    }

    /// POST request builder.
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(format!("{}{}", self.base_url(), path))
    }

    /// PUT request builder.
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(format!("{}{}", self.base_url(), path))
    }

    /// DELETE request builder.
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(format!("{}{}", self.base_url(), path))
    }

    /// Check if server is healthy.
    pub async fn health(&self) -> Result<bool> {
        let resp = self.get("/health").send().await?;
        Ok(resp.status().is_success())
    }
}

/// Find an available port for the test server.
async fn find_available_port() -> Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}

/// Wait for the server to become ready.
async fn wait_for_server(client: &Client, addr: SocketAddr) -> Result<()> {
    let url = format!("http://{}/health", addr);

    let result = timeout(Duration::from_secs(5), async {
        loop {
            match client.get(&url).send().await {
                Ok(resp) if resp.status().is_success() => return,
                _ => tokio::time::sleep(Duration::from_millis(50)).await,
            }
        }
    })
    .await;

    match result {
        Ok(()) => Ok(()),
        Err(_) => anyhow::bail!("Timeout waiting for server to start"),
    }
}
