//! Recipe delivery record
//!
//! The unit of input consumed by every report subject: one row binding a
//! recipe name and postcode to a weekly delivery window.

use super::time_slot::DeliveryWindow;
use serde::{Deserialize, Serialize};

/// One recipe delivery, as decoded from the source file
///
/// Records are immutable once read; the report processor owns each record
/// only for the duration of a single fan-out step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeliveryRecord {
    /// Destination postcode, kept as an opaque string
    pub postcode: String,

    /// Recipe name as it appears in the source
    pub recipe: String,

    /// Weekly delivery window in `<Weekday> <from> - <to>` text form
    pub delivery: DeliveryWindow,
}
