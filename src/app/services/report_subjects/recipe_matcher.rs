//! Recipe name matcher subject

use super::ReportSubject;
use crate::app::models::DeliveryRecord;
use crate::app::services::report_processor::Report;
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Collects recipe names containing any of the target substrings
///
/// Targets are tried in the order supplied and matching is a plain
/// case-sensitive substring test; the first hit claims the record, so a
/// recipe matching several targets is still collected once. Matched names
/// are deduplicated through the ordered set, which also yields the sorted
/// output the report requires.
#[derive(Debug)]
pub struct RecipeNameMatcher {
    names: Vec<String>,
    matched: BTreeSet<String>,
}

impl RecipeNameMatcher {
    /// Create a matcher for the given target substrings
    ///
    /// At least one target is required; an empty list is a selection error
    /// caught here, before the processing pass begins.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::selection(
                "recipe name matcher requires at least one target name",
            ));
        }
        Ok(Self {
            names,
            matched: BTreeSet::new(),
        })
    }
}

impl ReportSubject for RecipeNameMatcher {
    fn consume(&mut self, record: &DeliveryRecord) {
        for name in &self.names {
            if record.recipe.contains(name) {
                self.matched.insert(record.recipe.clone());
                return;
            }
        }
    }

    fn finalize(&mut self, report: &mut Report) {
        if self.matched.is_empty() {
            return;
        }
        report.match_by_name = self.matched.iter().cloned().collect();
    }
}
