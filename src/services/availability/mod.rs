pub mod webhook;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{AvailabilityVerdict, StayWindow};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("availability webhook is not configured")]
    NotConfigured,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// Source of truth for the hotel's capacity.
#[async_trait]
pub trait AvailabilityGateway: Send + Sync {
    /// Days with no capacity left.
    async fn blocked_dates(&self) -> Result<Vec<NaiveDate>, GatewayError>;

    /// Whether `window` can still be booked.
    async fn check(&self, window: StayWindow) -> Result<AvailabilityVerdict, GatewayError>;
}
