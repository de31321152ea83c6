//! Busiest postcode finder subject

use super::ReportSubject;
use crate::app::models::{DeliveryRecord, DeliveryWindow};
use crate::app::services::report_processor::{BusiestPostcode, Report};
use std::collections::{BTreeMap, HashSet};

/// Finds the postcode with the most deliveries
///
/// A postcode's busyness is the number of *distinct* delivery windows seen
/// for it, so repeated identical records do not inflate the count. Ties are
/// broken deterministically in favour of the lexicographically smallest
/// postcode: the ordered map is traversed in key order and a candidate only
/// replaces the current leader on a strictly greater window count.
#[derive(Debug, Default)]
pub struct BusiestPostcodeFinder {
    windows_per_postcode: BTreeMap<String, HashSet<DeliveryWindow>>,
}

impl BusiestPostcodeFinder {
    /// Create a finder with no postcodes seen
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSubject for BusiestPostcodeFinder {
    fn consume(&mut self, record: &DeliveryRecord) {
        self.windows_per_postcode
            .entry(record.postcode.clone())
            .or_default()
            .insert(record.delivery);
    }

    fn finalize(&mut self, report: &mut Report) {
        let mut busiest: Option<BusiestPostcode> = None;
        for (postcode, windows) in &self.windows_per_postcode {
            let leads = busiest
                .as_ref()
                .is_none_or(|current| windows.len() > current.delivery_count);
            if leads {
                busiest = Some(BusiestPostcode {
                    postcode: postcode.clone(),
                    delivery_count: windows.len(),
                });
            }
        }
        if busiest.is_some() {
            report.busiest_postcode = busiest;
        }
    }
}
