//! Fan-out driver for a single report-processing pass

use super::report::Report;
use crate::app::models::DeliveryRecord;
use crate::app::services::report_subjects::ReportSubject;
use crate::{Error, Result};
use tracing::{debug, info};

/// Drives one pass over a delivery record source
///
/// The processor exclusively owns its subject list for the duration of the
/// pass, and [`process`](ReportProcessor::process) consumes the processor:
/// subject accumulator state is single-use, so a fresh processor must be
/// constructed for every invocation.
pub struct ReportProcessor {
    subjects: Vec<Box<dyn ReportSubject>>,
}

impl ReportProcessor {
    /// Create a processor from a non-empty subject list
    ///
    /// The list order fixes the (deterministic) fan-out order; it has no
    /// effect on the report contents since subjects are independent.
    pub fn new(subjects: Vec<Box<dyn ReportSubject>>) -> Result<Self> {
        if subjects.is_empty() {
            return Err(Error::selection("no report subjects selected"));
        }
        Ok(Self { subjects })
    }

    /// Number of subjects participating in the pass
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Consume the record source once and assemble the combined report
    ///
    /// Each record visits every subject in list order. The first `Err` from
    /// the source aborts the whole pass before any finalize step runs; no
    /// partial report is produced. On successful exhaustion every subject
    /// finalizes, in list order, into one shared report.
    pub fn process(
        mut self,
        records: impl IntoIterator<Item = Result<DeliveryRecord>>,
    ) -> Result<Report> {
        let mut record_count = 0usize;
        for record in records {
            let record = record?;
            for subject in &mut self.subjects {
                subject.consume(&record);
            }
            record_count += 1;
        }
        debug!(
            "Consumed {} records across {} subjects",
            record_count,
            self.subjects.len()
        );

        let mut report = Report::default();
        for subject in &mut self.subjects {
            subject.finalize(&mut report);
        }
        info!(
            "Report assembled from {} records, {} subjects",
            record_count,
            self.subjects.len()
        );
        Ok(report)
    }
}
