use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use super::availability::{AvailabilityState, AvailabilityVerdict};
use super::booking::{BookingForm, BookingRequest, DateSelection, ServiceType, StayWindow};
use super::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{0} is in the past")]
    PastDate(NaiveDate),

    #[error("{0} is fully booked")]
    BlockedDate(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission is locked until an available period is selected")]
    Locked(Notification),

    #[error("missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
}

/// An availability check the caller must run and hand back via `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    pub seq: u64,
    pub window: StayWindow,
}

/// One visitor's booking form.
#[derive(Debug, Clone)]
pub struct BookingSession {
    pub id: Uuid,
    pub service: ServiceType,
    pub selection: DateSelection,
    pub state: AvailabilityState,
    pub blocked_dates: BTreeSet<NaiveDate>,
    pub last_notification: Option<Notification>,
    seq: u64,
    pub created_at: NaiveDateTime,
    pub last_activity: NaiveDateTime,
}

impl BookingSession {
    pub fn new(service: ServiceType, now: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            service,
            selection: DateSelection::Empty,
            state: AvailabilityState::Idle,
            blocked_dates: BTreeSet::new(),
            last_notification: None,
            seq: 0,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state.permits_submission()
    }

    pub fn is_expired(&self, now: NaiveDateTime, ttl: Duration) -> bool {
        now - self.last_activity > ttl
    }

    fn bump(&mut self, now: NaiveDateTime) -> u64 {
        self.seq += 1;
        self.last_activity = now;
        self.seq
    }

    /// Switches between day-use and lodging, dropping the selection and any verdict.
    pub fn switch_service(&mut self, service: ServiceType, now: NaiveDateTime) {
        self.bump(now);
        self.service = service;
        self.selection = DateSelection::Empty;
        self.state = AvailabilityState::Idle;
        self.last_notification = None;
        if service == ServiceType::DayUse {
            self.blocked_dates.clear();
        }
    }

    pub fn set_blocked_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.blocked_dates = dates.into_iter().collect();
    }

    /// Records a new date selection. Returns a ticket when the selection is
    /// complete enough to be checked.
    pub fn select(
        &mut self,
        selection: DateSelection,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Option<CheckTicket>, SelectionError> {
        for date in selection.dates() {
            if date < today {
                return Err(SelectionError::PastDate(date));
            }
            if self.service == ServiceType::Lodging && self.blocked_dates.contains(&date) {
                return Err(SelectionError::BlockedDate(date));
            }
        }

        let seq = self.bump(now);
        self.selection = selection;
        self.last_notification = None;

        match selection.window(self.service) {
            Some(window) => {
                self.state = AvailabilityState::Checking { seq };
                Ok(Some(CheckTicket { seq, window }))
            }
            None => {
                self.state = AvailabilityState::Idle;
                Ok(None)
            }
        }
    }

    /// Applies the result of the check issued with `seq`. `None` means the
    /// check could not be completed. Returns `None` when the result is stale.
    pub fn resolve(
        &mut self,
        seq: u64,
        verdict: Option<AvailabilityVerdict>,
    ) -> Option<Notification> {
        if self.state != (AvailabilityState::Checking { seq }) {
            return None;
        }

        self.state = AvailabilityState::from(verdict);
        let notification = match self.state {
            AvailabilityState::Available { open_slots } => Notification::available(open_slots),
            AvailabilityState::Unavailable => Notification::unavailable(),
            _ => Notification::unverified(),
        };
        self.last_notification = Some(notification.clone());
        Some(notification)
    }

    /// Validates the form against the gate and hands back the request to send.
    pub fn submit(&mut self, form: BookingForm) -> Result<BookingRequest, SubmitError> {
        let window = match self.selection.window(self.service) {
            Some(window) if self.can_submit() => window,
            _ => {
                let notification = Notification::submission_locked();
                self.last_notification = Some(notification.clone());
                return Err(SubmitError::Locked(notification));
            }
        };

        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::Incomplete(missing));
        }

        self.last_notification = Some(Notification::redirecting());
        Ok(BookingRequest {
            service: self.service,
            window,
            form,
        })
    }
}
