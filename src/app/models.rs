//! Data models for recipe delivery reporting
//!
//! This module contains the time vocabulary of the input format (hours,
//! weekdays, delivery windows) and the delivery record consumed by the
//! report subjects.

pub mod delivery;
pub mod time_slot;

pub use delivery::DeliveryRecord;
pub use time_slot::{DeliveryWindow, Hour, Weekday};
