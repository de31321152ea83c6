//! The merged report document and its per-subject fragments
//!
//! Each active subject writes at most its own field; fields left untouched
//! are skipped during serialization, so the emitted JSON only carries the
//! sections that were both requested and non-empty.

use crate::app::models::Hour;
use serde::Serialize;

/// Delivery count for a single recipe name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCount {
    pub recipe: String,
    pub count: u64,
}

/// The postcode with the most distinct delivery windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusiestPostcode {
    pub postcode: String,
    pub delivery_count: usize,
}

/// Delivery count for one postcode within an hour range
///
/// The hour bounds serialize in their 12-hour text form, matching the input
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostcodeTimeCount {
    pub postcode: String,
    pub from: Hour,
    pub to: Hour,
    pub delivery_count: u64,
}

/// The combined report assembled from all active subjects
///
/// `unique_recipe_count` is present whenever its subject was active, even at
/// zero. Every other field is additionally suppressed when empty: an empty
/// recipe table, an input with no records, a zero postcode/time count, or a
/// filter with no matches all omit their keys from the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_recipe_count: Option<usize>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub count_per_recipe: Vec<RecipeCount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_postcode: Option<BusiestPostcode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_per_postcode_and_time: Option<PostcodeTimeCount>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_by_name: Vec<String>,
}

impl Report {
    /// Whether no subject contributed anything to this report
    pub fn is_empty(&self) -> bool {
        self.unique_recipe_count.is_none()
            && self.count_per_recipe.is_empty()
            && self.busiest_postcode.is_none()
            && self.count_per_postcode_and_time.is_none()
            && self.match_by_name.is_empty()
    }
}
