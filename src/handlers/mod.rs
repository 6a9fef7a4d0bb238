pub mod booking;
pub mod content;
pub mod health;
pub mod media;
pub mod pages;
