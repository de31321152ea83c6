//! Test utilities shared across report subject tests
//!
//! Provides compact constructors for delivery records and windows so the
//! per-subject tests can state their fixtures on one line each.

use crate::app::models::{DeliveryRecord, DeliveryWindow, Hour};


/// Build a delivery record from a textual window form
pub fn record(postcode: &str, recipe: &str, window: &str) -> DeliveryRecord {
    DeliveryRecord {
        postcode: postcode.to_string(),
        recipe: recipe.to_string(),
        delivery: window.parse::<DeliveryWindow>().expect("test window parses"),
    }
}

/// Build an hour from its 24-hour value
pub fn hour(value: u8) -> Hour {
    Hour::new(value).expect("test hour in range")
}
