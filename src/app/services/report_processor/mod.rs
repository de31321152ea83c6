//! Single-pass report processing for recipe delivery records
//!
//! This module drives one pass over a delivery record source, fanning each
//! record out to every active report subject, and composes the subjects'
//! fragments into a single sparse [`Report`] document.
//!
//! ## Architecture
//!
//! - [`report`] - the merged output document and its per-subject fragments
//! - [`processor`] - the fan-out driver owning the subject list for one pass
//!
//! ## Usage
//!
//! ```rust
//! use recipe_reporter::app::services::report_processor::ReportProcessor;
//! use recipe_reporter::app::services::report_subjects::UniqueRecipeCounter;
//!
//! # fn example() -> recipe_reporter::Result<()> {
//! let processor = ReportProcessor::new(vec![Box::new(UniqueRecipeCounter::new())])?;
//! let report = processor.process(std::iter::empty())?;
//! assert_eq!(report.unique_recipe_count, Some(0));
//! # Ok(())
//! # }
//! ```

pub mod processor;
pub mod report;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::ReportProcessor;
pub use report::{BusiestPostcode, PostcodeTimeCount, RecipeCount, Report};
