pub mod availability;
pub mod booking;
pub mod content;
pub mod media;
pub mod messaging;
