//! Neo4j connection management and health checks
//!
//! This module provides the client the quote store runs on, plus a timed
//! `RETURN 1` health check with retries used by the CLI before serving.

use crate::config::StoreConfig;
use crate::error::{QuoteError, Result};
use chrono::{DateTime, Utc};
use neo4rs::{query, ConfigBuilder, Graph};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Configuration for health check behavior
#[derive(Debug, Clone)]
pub struct HealthCheckConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Delay between retry attempts
    pub retry_delay: Duration,
    /// Response time threshold for degraded state (in milliseconds)
    pub degraded_threshold_ms: u64,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
            degraded_threshold_ms: 1000,
        }
    }
}

/// Health status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Database is healthy and responsive
    Healthy,
    /// Database is responsive but slow (above degraded threshold)
    Degraded,
    /// Database is not responsive or erroring
    Unhealthy,
}

impl HealthStatus {
    /// Check if status is healthy or degraded (operational)
    pub fn is_operational(&self) -> bool {
        matches!(self, HealthStatus::Healthy | HealthStatus::Degraded)
    }
}

/// Health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Overall health status
    pub status: HealthStatus,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Timestamp of the health check
    pub timestamp: DateTime<Utc>,
    /// Error message (if unhealthy)
    pub error: Option<String>,
    /// Number of retry attempts made
    pub retry_count: u32,
}

impl HealthCheckResult {
    fn healthy(response_time: Duration, degraded_threshold_ms: u64) -> Self {
        let response_time_ms = response_time.as_millis() as u64;
        let status = if response_time_ms > degraded_threshold_ms {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        Self {
            status,
            response_time_ms,
            timestamp: Utc::now(),
            error: None,
            retry_count: 0,
        }
    }

    fn unhealthy(response_time: Duration, error: &str) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            response_time_ms: response_time.as_millis() as u64,
            timestamp: Utc::now(),
            error: Some(error.to_string()),
            retry_count: 0,
        }
    }
}

/// Neo4j client with connection pooling
pub struct Neo4jClient {
    graph: Graph,
    health_config: HealthCheckConfig,
}

impl Neo4jClient {
    /// Create a new Neo4j client
    ///
    /// # Arguments
    /// * `uri` - Neo4j connection URI (e.g., "bolt://localhost:7687")
    /// * `user` - Username for authentication
    /// * `password` - Password for authentication
    /// * `database` - Database name (default: "neo4j")
    ///
    /// # Example
    /// ```no_run
    /// use quotebook_kg::Neo4jClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let client = Neo4jClient::new(
    ///         "bolt://localhost:7687",
    ///         "neo4j",
    ///         "password",
    ///         "neo4j"
    ///     ).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(uri: &str, user: &str, password: &str, database: &str) -> Result<Self> {
        info!("Connecting to Neo4j at {} (database: {})", uri, database);

        let config = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password)
            .db(database)
            .fetch_size(500)
            .max_connections(16)
            .build()
            .map_err(|e| QuoteError::ConfigError(e.to_string()))?;

        let graph = Graph::connect(config)
            .await
            .map_err(|e| QuoteError::ConnectionError(e.to_string()))?;

        info!("Successfully connected to Neo4j");

        Ok(Self {
            graph,
            health_config: HealthCheckConfig::default(),
        })
    }

    /// Connect using the store section of the application configuration
    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(&config.uri, &config.user, &config.password, &config.database).await
    }

    /// Replace the health check configuration
    pub fn with_health_config(mut self, health_config: HealthCheckConfig) -> Self {
        self.health_config = health_config;
        self
    }

    /// Simple health check using RETURN 1
    ///
    /// # Returns
    /// * `Ok(true)` if connection is healthy
    /// * `Err(QuoteError)` if connection fails
    pub async fn health_check(&self) -> Result<bool> {
        debug!("Executing simple health check (RETURN 1)");

        self.graph
            .run(query("RETURN 1"))
            .await
            .map_err(|e| QuoteError::ConnectionError(e.to_string()))?;

        debug!("Simple health check passed");
        Ok(true)
    }

    /// Timed health check with retries
    ///
    /// Always returns a `HealthCheckResult`; a failing database shows up as
    /// `HealthStatus::Unhealthy` after the configured retries are spent.
    pub async fn health_check_with_retry(&self) -> HealthCheckResult {
        let mut retry_count = 0;

        loop {
            let start = Instant::now();

            let mut result = match self.health_check().await {
                Ok(_) => HealthCheckResult::healthy(
                    start.elapsed(),
                    self.health_config.degraded_threshold_ms,
                ),
                Err(e) => {
                    error!("Health check failed: {}", e);
                    HealthCheckResult::unhealthy(start.elapsed(), &e.to_string())
                }
            };

            if result.status.is_operational() || retry_count >= self.health_config.max_retries {
                result.retry_count = retry_count;
                return result;
            }

            retry_count += 1;
            warn!(
                "Health check failed (attempt {}/{}), retrying after {:?}",
                retry_count,
                self.health_config.max_retries + 1,
                self.health_config.retry_delay
            );
            tokio::time::sleep(self.health_config.retry_delay).await;
        }
    }

    /// Get a reference to the underlying Neo4j Graph instance
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
