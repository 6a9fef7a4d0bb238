use std::env;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

// Brasília time.
const DEFAULT_UTC_OFFSET_SECS: i32 = -3 * 3600;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub availability_webhook_url: String,
    pub webhook_timeout_secs: u64,
    pub booking_whatsapp: String,
    pub contact_whatsapp: String,
    pub business_name: String,
    pub session_ttl_minutes: i64,
    /// Offset of the business's calendar day, used for past-date checks.
    pub business_utc_offset: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            availability_webhook_url: env::var("AVAILABILITY_WEBHOOK_URL").unwrap_or_default(),
            webhook_timeout_secs: env::var("WEBHOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            booking_whatsapp: env::var("BOOKING_WHATSAPP")
                .unwrap_or_else(|_| "555194244240".to_string()),
            contact_whatsapp: env::var("CONTACT_WHATSAPP")
                .unwrap_or_else(|_| "5528999574221".to_string()),
            business_name: env::var("BUSINESS_NAME").unwrap_or_else(|_| "RK9".to_string()),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &i64| *v > 0)
                .unwrap_or(60),
            business_utc_offset: env::var("BUSINESS_UTC_OFFSET")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_else(default_utc_offset),
        }
    }

    /// The current calendar day where the business operates.
    pub fn today(&self) -> NaiveDate {
        local_date(Utc::now(), self.business_utc_offset)
    }
}

pub fn default_utc_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn local_date(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        // Only asserts on keys the test environment never sets.
        let config = AppConfig::from_env();
        assert!(config.webhook_timeout_secs > 0);
        assert!(config.session_ttl_minutes > 0);
        assert!(!config.booking_whatsapp.is_empty());
    }

    #[test]
    fn test_default_offset_is_brasilia() {
        assert_eq!(default_utc_offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_late_evening_stays_on_business_day() {
        // 22:30 in Brasília is already the next day in UTC.
        let now = DateTime::parse_from_rfc3339("2026-10-17T01:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(now.date_naive(), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert_eq!(
            local_date(now, default_utc_offset()),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
    }

    #[test]
    fn test_offset_parses_from_env_format() {
        let offset: FixedOffset = "+09:00".parse().unwrap();
        assert_eq!(offset.local_minus_utc(), 9 * 3600);
    }
}
