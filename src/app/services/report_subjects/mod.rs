//! Report subjects for recipe delivery aggregation
//!
//! A report subject is a small stateful aggregator that consumes the full
//! delivery record stream exactly once and then writes one fragment of the
//! combined [`Report`](crate::app::services::report_processor::Report). The
//! subjects are independent: no subject reads another's state, and the order
//! in which their fragments are written does not matter.
//!
//! ## Architecture
//!
//! The closed set of subjects lives behind the [`ReportSubject`] trait:
//! - [`unique_recipes`] - count of distinct recipe names
//! - [`count_per_recipe`] - delivery count per recipe name
//! - [`busiest_postcode`] - postcode with the most distinct delivery windows
//! - [`recipe_matcher`] - recipe names matching a substring filter
//! - [`postcode_time`] - delivery count for one postcode within an hour range
//!
//! Accumulator state is single-use: a fresh subject set must be constructed
//! for every processing pass.

pub mod busiest_postcode;
pub mod count_per_recipe;
pub mod postcode_time;
pub mod recipe_matcher;
pub mod unique_recipes;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use busiest_postcode::BusiestPostcodeFinder;
pub use count_per_recipe::CounterPerRecipe;
pub use postcode_time::PostcodeTimeRangeCounter;
pub use recipe_matcher::RecipeNameMatcher;
pub use unique_recipes::UniqueRecipeCounter;

use crate::app::models::DeliveryRecord;
use crate::app::services::report_processor::Report;

/// Capability set shared by every report subject
///
/// `consume` is invoked once per record, in source order, with no filtering
/// pre-applied; it updates private accumulator state and never fails
/// (structurally invalid records are rejected upstream during decoding).
/// `finalize` is invoked exactly once after the stream is exhausted and
/// writes at most the subject's own field into the shared report.
pub trait ReportSubject {
    /// Fold one delivery record into the subject's accumulator state
    fn consume(&mut self, record: &DeliveryRecord);

    /// Write this subject's fragment into the shared report
    fn finalize(&mut self, report: &mut Report);
}
