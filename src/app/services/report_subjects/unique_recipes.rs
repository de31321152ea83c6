//! Unique recipe counter subject

use super::ReportSubject;
use crate::app::models::DeliveryRecord;
use crate::app::services::report_processor::Report;
use std::collections::HashSet;

/// Counts the number of distinct recipe names in the stream
///
/// Unlike the other subjects, this one always writes its field, so an empty
/// input reports an explicit count of zero rather than omitting the key.
#[derive(Debug, Default)]
pub struct UniqueRecipeCounter {
    recipes: HashSet<String>,
}

impl UniqueRecipeCounter {
    /// Create a counter with no recipes seen
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSubject for UniqueRecipeCounter {
    fn consume(&mut self, record: &DeliveryRecord) {
        if !self.recipes.contains(&record.recipe) {
            self.recipes.insert(record.recipe.clone());
        }
    }

    fn finalize(&mut self, report: &mut Report) {
        report.unique_recipe_count = Some(self.recipes.len());
    }
}
