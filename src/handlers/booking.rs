use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    AvailabilityState, BookingForm, BookingSession, DateSelection, Notification, ServiceType,
};
use crate::services::booking::{self, Submission};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub service: ServiceType,
    pub selection: DateSelection,
    pub availability: AvailabilityState,
    pub can_submit: bool,
    pub blocked_dates: Vec<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl From<BookingSession> for SessionView {
    fn from(session: BookingSession) -> Self {
        Self {
            id: session.id,
            service: session.service,
            selection: session.selection,
            can_submit: session.can_submit(),
            availability: session.state,
            blocked_dates: session.blocked_dates.into_iter().collect(),
            notification: session.last_notification,
        }
    }
}

// GET /api/booking/blocked-dates
#[derive(Serialize)]
pub struct BlockedDatesResponse {
    pub blocked_dates: Vec<NaiveDate>,
}

pub async fn get_blocked_dates(State(state): State<Arc<AppState>>) -> Json<BlockedDatesResponse> {
    Json(BlockedDatesResponse {
        blocked_dates: booking::blocked_dates(&state).await,
    })
}

// POST /api/booking/sessions
#[derive(Deserialize, Default)]
pub struct OpenSessionRequest {
    #[serde(default)]
    pub service: ServiceType,
}

pub async fn open_session(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<OpenSessionRequest>>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let Json(payload) = payload.unwrap_or_default();
    let session = booking::open_session(&state, payload.service).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

// GET /api/booking/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(booking::get_session(&state, id)?.into()))
}

// PUT /api/booking/sessions/:id/service
#[derive(Deserialize)]
pub struct ChangeServiceRequest {
    pub service: ServiceType,
}

pub async fn change_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeServiceRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = booking::change_service(&state, id, payload.service).await?;
    Ok(Json(session.into()))
}

// PUT /api/booking/sessions/:id/dates
#[derive(Deserialize)]
pub struct SelectDatesRequest {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub async fn select_dates(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectDatesRequest>,
) -> Result<Json<SessionView>, AppError> {
    let selection = DateSelection::from_parts(payload.from, payload.to);
    let session = booking::select_dates(&state, id, selection).await?;
    Ok(Json(session.into()))
}

// POST /api/booking/sessions/:id/submit
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(form): Json<BookingForm>,
) -> Result<Json<Submission>, AppError> {
    Ok(Json(booking::submit(&state, id, form)?))
}

// GET /api/booking/sessions/:id/events — SSE stream
pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, AppError> {
    // 404 before subscribing to a session that does not exist.
    booking::get_session(&state, id)?;

    let rx = state.events_tx.subscribe();

    let live_stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(event) if event.session_id == id => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data).event("notification")))
        }
        Ok(_) => None,
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(_)) => None,
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    Ok(Sse::new(StreamExt::merge(live_stream, keepalive_stream)))
}
