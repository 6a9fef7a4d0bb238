use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{AvailabilityGateway, GatewayError};
use crate::models::{AvailabilityVerdict, StayWindow};

const ACTION_BLOCKED_DATES: &str = "buscar_datas_lotadas";
const ACTION_CHECK: &str = "checar_disponibilidade";
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
struct BlockedDatesReply {
    sucesso: bool,
    #[serde(default)]
    datas_lotadas: Vec<String>,
}

/// Talks to the booking automation webhook. Every call is a JSON POST to the
/// same URL with an `action` discriminator.
pub struct WebhookAvailabilityGateway {
    url: String,
    client: reqwest::Client,
}

impl WebhookAvailabilityGateway {
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { url, client }
    }

    async fn post(&self, body: Value) -> Result<String, GatewayError> {
        if self.url.is_empty() {
            return Err(GatewayError::NotConfigured);
        }

        let resp = self.client.post(&self.url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }

        Ok(resp.text().await?)
    }
}

/// Only an explicit boolean `disponivel` counts as an answer.
fn parse_check_reply(body: &str) -> Result<AvailabilityVerdict, GatewayError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::Malformed(format!("not JSON: {e}")))?;

    match data.get("disponivel").and_then(Value::as_bool) {
        Some(true) => Ok(AvailabilityVerdict::Available {
            open_slots: data
                .get("vagas_abertas")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
        }),
        Some(false) => Ok(AvailabilityVerdict::Unavailable),
        None => Err(GatewayError::Malformed(
            "missing boolean `disponivel`".to_string(),
        )),
    }
}

fn parse_blocked_dates_reply(body: &str) -> Result<Vec<NaiveDate>, GatewayError> {
    let reply: BlockedDatesReply = serde_json::from_str(body)
        .map_err(|e| GatewayError::Malformed(format!("blocked dates: {e}")))?;

    if !reply.sucesso {
        return Err(GatewayError::Malformed("sucesso=false".to_string()));
    }

    let mut dates: Vec<NaiveDate> = reply
        .datas_lotadas
        .iter()
        .filter_map(|raw| match NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::warn!(value = %raw, "skipping unparseable blocked date");
                None
            }
        })
        .collect();
    dates.sort();
    dates.dedup();
    Ok(dates)
}

#[async_trait]
impl AvailabilityGateway for WebhookAvailabilityGateway {
    async fn blocked_dates(&self) -> Result<Vec<NaiveDate>, GatewayError> {
        let body = self.post(json!({ "action": ACTION_BLOCKED_DATES })).await?;
        parse_blocked_dates_reply(&body)
    }

    async fn check(&self, window: StayWindow) -> Result<AvailabilityVerdict, GatewayError> {
        let body = self
            .post(json!({
                "action": ACTION_CHECK,
                "dados": {
                    "data_entrada": window.entry.format(WIRE_DATE_FORMAT).to_string(),
                    "data_saida": window.exit.format(WIRE_DATE_FORMAT).to_string(),
                },
            }))
            .await?;
        parse_check_reply(&body)
    }
}
