use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::{BookingSession, Notification};
use crate::services::availability::AvailabilityGateway;

/// A notification addressed to one booking session's SSE subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub session_id: Uuid,
    pub state: &'static str,
    pub notification: Notification,
}

pub struct AppState {
    pub config: AppConfig,
    pub availability: Box<dyn AvailabilityGateway>,
    pub sessions: Mutex<HashMap<Uuid, BookingSession>>,
    pub events_tx: broadcast::Sender<SessionEvent>,
}

impl AppState {
    pub fn new(config: AppConfig, availability: Box<dyn AvailabilityGateway>) -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            config,
            availability,
            sessions: Mutex::new(HashMap::new()),
            events_tx,
        }
    }
}
