//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.
//! Clients keep a cookie store so the anonymous identity persists across
//! requests, the way a browser would hold it.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use kotha_api::{create_app, create_app_state};
use kotha_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    /// Default client; holds one anonymous identity across requests
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        // Bind on an OS-assigned port
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        Ok(Self {
            addr: actual_addr,
            client: Self::new_client()?,
            _handle: handle,
        })
    }

    /// Build a fresh client with its own cookie store (a distinct anonymous
    /// identity)
    pub fn new_client() -> Result<Client> {
        Ok(Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()?)
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request with the default client
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_with(&self.client, path).await
    }

    /// Make a GET request with a specific client
    pub async fn get_with(&self, client: &Client, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.post_with(&self.client, path, body).await
    }

    /// Make a POST request with a specific client
    pub async fn post_with<T: Serialize>(
        &self,
        client: &Client,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.post(&url).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.put_with(&self.client, path, body).await
    }

    /// Make a PUT request with a specific client
    pub async fn put_with<T: Serialize>(
        &self,
        client: &Client,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.put(&url).json(body).send().await?)
    }

    /// Make a DELETE request with the default client
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.delete_with(&self.client, path).await
    }

    /// Make a DELETE request with a specific client
    pub async fn delete_with(&self, client: &Client, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.delete(&url).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
