//! Test utilities for report processor tests

use crate::app::models::{DeliveryRecord, DeliveryWindow};
use crate::app::services::report_processor::Report;
use crate::app::services::report_subjects::ReportSubject;
use std::cell::RefCell;
use std::rc::Rc;

// Test modules
mod processor_tests;

/// Build a delivery record from a textual window form
pub fn record(postcode: &str, recipe: &str, window: &str) -> DeliveryRecord {
    DeliveryRecord {
        postcode: postcode.to_string(),
        recipe: recipe.to_string(),
        delivery: window.parse::<DeliveryWindow>().expect("test window parses"),
    }
}

/// Observations a [`ProbeSubject`] makes while the processor drives it
#[derive(Debug, Default)]
pub struct ProbeState {
    pub consumed: Vec<String>,
    pub finalized: bool,
}

/// Probe subject sharing its observations with the test through an `Rc`
///
/// The processor consumes its subjects, so the probe writes everything it
/// sees into shared state the test keeps a handle on.
#[derive(Debug)]
pub struct ProbeSubject {
    state: Rc<RefCell<ProbeState>>,
}

impl ProbeSubject {
    pub fn new() -> (Self, Rc<RefCell<ProbeState>>) {
        let state = Rc::new(RefCell::new(ProbeState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl ReportSubject for ProbeSubject {
    fn consume(&mut self, record: &DeliveryRecord) {
        self.state.borrow_mut().consumed.push(record.recipe.clone());
    }

    fn finalize(&mut self, _report: &mut Report) {
        self.state.borrow_mut().finalized = true;
    }
}
