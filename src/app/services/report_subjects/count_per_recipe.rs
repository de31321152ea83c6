//! Per-recipe delivery counter subject

use super::ReportSubject;
use crate::app::models::DeliveryRecord;
use crate::app::services::report_processor::{RecipeCount, Report};
use std::collections::BTreeMap;

/// Counts deliveries per recipe name
///
/// The ordered map keeps recipe names in lexicographic order, which is
/// exactly the order the report requires, so finalize is a straight copy.
#[derive(Debug, Default)]
pub struct CounterPerRecipe {
    counts: BTreeMap<String, u64>,
}

impl CounterPerRecipe {
    /// Create a counter with no deliveries seen
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSubject for CounterPerRecipe {
    fn consume(&mut self, record: &DeliveryRecord) {
        *self.counts.entry(record.recipe.clone()).or_insert(0) += 1;
    }

    fn finalize(&mut self, report: &mut Report) {
        if self.counts.is_empty() {
            return;
        }
        report.count_per_recipe = self
            .counts
            .iter()
            .map(|(recipe, count)| RecipeCount {
                recipe: recipe.clone(),
                count: *count,
            })
            .collect();
    }
}
