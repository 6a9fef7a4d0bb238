pub mod availability;
pub mod booking;
pub mod content;
pub mod notification;
pub mod session;

pub use availability::{AvailabilityState, AvailabilityVerdict};
pub use booking::{BookingForm, BookingRequest, DateSelection, PetSize, ServiceType, StayWindow};
pub use content::SiteContent;
pub use notification::{Notification, NotificationLevel};
pub use session::{BookingSession, CheckTicket, SelectionError, SubmitError};
