//! Postcode and time range delivery counter subject

use super::ReportSubject;
use crate::app::models::{DeliveryRecord, Hour};
use crate::app::services::report_processor::{PostcodeTimeCount, Report};

/// Counts deliveries to one postcode whose window lies within an hour range
///
/// A record matches when its postcode equals the target and its window's hour
/// range falls entirely inside the closed `[from, to]` bound. The weekday of
/// the record's window plays no part in the match.
///
/// A zero count suppresses the report field entirely rather than emitting an
/// explicit zero; this mirrors the source system's output contract.
#[derive(Debug)]
pub struct PostcodeTimeRangeCounter {
    postcode: String,
    from: Hour,
    to: Hour,
    delivery_count: u64,
}

impl PostcodeTimeRangeCounter {
    /// Create a counter for the given postcode and closed hour range
    pub fn new(postcode: impl Into<String>, from: Hour, to: Hour) -> Self {
        Self {
            postcode: postcode.into(),
            from,
            to,
            delivery_count: 0,
        }
    }
}

impl ReportSubject for PostcodeTimeRangeCounter {
    fn consume(&mut self, record: &DeliveryRecord) {
        let matched = record.postcode == self.postcode
            && self.from <= record.delivery.from
            && record.delivery.to <= self.to;
        if matched {
            self.delivery_count += 1;
        }
    }

    fn finalize(&mut self, report: &mut Report) {
        if self.delivery_count == 0 {
            return;
        }
        report.count_per_postcode_and_time = Some(PostcodeTimeCount {
            postcode: self.postcode.clone(),
            from: self.from,
            to: self.to,
            delivery_count: self.delivery_count,
        });
    }
}
