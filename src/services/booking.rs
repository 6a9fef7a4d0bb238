use std::collections::HashMap;
use std::sync::MutexGuard;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    AvailabilityVerdict, BookingForm, BookingSession, DateSelection, Notification, ServiceType,
    StayWindow, SubmitError,
};
use crate::services::availability::GatewayError;
use crate::services::messaging::{compose_booking_message, whatsapp};
use crate::state::{AppState, SessionEvent};

/// What the visitor gets back once the request is cleared.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub whatsapp_url: String,
    pub message: String,
    pub notification: Notification,
}

fn sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, BookingSession>>, AppError> {
    state.sessions.lock().map_err(|_| AppError::Poisoned)
}

fn with_session<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut BookingSession) -> T,
) -> Result<T, AppError> {
    let mut sessions = sessions(state)?;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("booking session {id}")))?;
    Ok(f(session))
}

fn publish(state: &AppState, session: &BookingSession, notification: Notification) {
    // No subscribers is fine.
    let _ = state.events_tx.send(SessionEvent {
        session_id: session.id,
        state: session.state.as_str(),
        notification,
    });
}

/// Fully booked days. Failures yield an empty list so the picker stays usable.
pub async fn blocked_dates(state: &AppState) -> Vec<NaiveDate> {
    match state.availability.blocked_dates().await {
        Ok(dates) => dates,
        Err(GatewayError::NotConfigured) => vec![],
        Err(e) => {
            tracing::warn!(error = %e, "could not load blocked dates, assuming none");
            vec![]
        }
    }
}

/// Runs one availability check; `None` means the visitor may proceed unverified.
async fn run_check(state: &AppState, window: StayWindow) -> Option<AvailabilityVerdict> {
    match state.availability.check(window).await {
        Ok(verdict) => Some(verdict),
        Err(GatewayError::Malformed(detail)) => {
            tracing::warn!(%detail, entry = %window.entry, exit = %window.exit, "unreadable availability reply, failing open");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, entry = %window.entry, exit = %window.exit, "availability check failed, failing open");
            None
        }
    }
}

fn prune_expired(state: &AppState) -> Result<(), AppError> {
    let now = Utc::now().naive_utc();
    let ttl = Duration::minutes(state.config.session_ttl_minutes);
    let mut sessions = sessions(state)?;
    let before = sessions.len();
    sessions.retain(|_, s| !s.is_expired(now, ttl));
    let pruned = before - sessions.len();
    if pruned > 0 {
        tracing::debug!(pruned, "dropped idle booking sessions");
    }
    Ok(())
}

async fn refresh_blocked_dates(state: &AppState, id: Uuid) -> Result<(), AppError> {
    let dates = blocked_dates(state).await;
    with_session(state, id, |session| {
        if session.service == ServiceType::Lodging {
            session.set_blocked_dates(dates);
        }
    })
}

pub async fn open_session(
    state: &AppState,
    service: ServiceType,
) -> Result<BookingSession, AppError> {
    prune_expired(state)?;

    let session = BookingSession::new(service, Utc::now().naive_utc());
    let id = session.id;
    sessions(state)?.insert(id, session);
    tracing::info!(session = %id, service = service.as_str(), "booking session opened");

    if service == ServiceType::Lodging {
        refresh_blocked_dates(state, id).await?;
    }
    get_session(state, id)
}

pub fn get_session(state: &AppState, id: Uuid) -> Result<BookingSession, AppError> {
    with_session(state, id, |session| session.clone())
}

pub async fn change_service(
    state: &AppState,
    id: Uuid,
    service: ServiceType,
) -> Result<BookingSession, AppError> {
    with_session(state, id, |session| {
        session.switch_service(service, Utc::now().naive_utc())
    })?;
    tracing::info!(session = %id, service = service.as_str(), "service type changed");

    if service == ServiceType::Lodging {
        refresh_blocked_dates(state, id).await?;
    }
    get_session(state, id)
}

/// Records the selection and, when it is complete, checks it against the
/// webhook. The lock is not held across the request; a result that lost the
/// race to a newer selection is discarded.
pub async fn select_dates(
    state: &AppState,
    id: Uuid,
    selection: DateSelection,
) -> Result<BookingSession, AppError> {
    let today = state.config.today();
    let ticket = with_session(state, id, |session| {
        session.select(selection, today, Utc::now().naive_utc())
    })??;

    let Some(ticket) = ticket else {
        return get_session(state, id);
    };

    tracing::info!(
        session = %id,
        seq = ticket.seq,
        entry = %ticket.window.entry,
        exit = %ticket.window.exit,
        "checking availability"
    );
    let verdict = run_check(state, ticket.window).await;

    with_session(state, id, |session| {
        match session.resolve(ticket.seq, verdict) {
            Some(notification) => publish(state, session, notification),
            None => tracing::debug!(session = %id, seq = ticket.seq, "discarding stale availability result"),
        }
        session.clone()
    })
}

/// Gates the request, then builds the WhatsApp message and deep link. The
/// session is discarded once the link is handed out.
pub fn submit(state: &AppState, id: Uuid, form: BookingForm) -> Result<Submission, AppError> {
    let request = with_session(state, id, |session| {
        let result = session.submit(form);
        if let Err(SubmitError::Locked(notification)) = &result {
            publish(state, session, notification.clone());
        }
        result
    })??;

    let message = compose_booking_message(&state.config.business_name, &request);
    let url = whatsapp::deep_link(&state.config.booking_whatsapp, Some(&message))?;

    sessions(state)?.remove(&id);
    tracing::info!(
        session = %id,
        service = request.service.as_str(),
        nights = request.window.nights(),
        "booking request handed off to WhatsApp"
    );

    Ok(Submission {
        whatsapp_url: url.to_string(),
        message,
        notification: Notification::redirecting(),
    })
}
