//! Tests for the single-pass fan-out processor

use super::{ProbeSubject, record};
use crate::app::services::report_processor::ReportProcessor;
use crate::app::services::report_subjects::{
    CounterPerRecipe, ReportSubject, UniqueRecipeCounter,
};
use crate::{Error, Result};

#[test]
fn test_empty_subject_list_is_rejected() {
    let result = ReportProcessor::new(Vec::new());
    assert!(matches!(result, Err(Error::Selection { .. })));
}

#[test]
fn test_every_record_visits_every_subject_in_order() {
    let (probe_a, state_a) = ProbeSubject::new();
    let (probe_b, state_b) = ProbeSubject::new();
    let processor =
        ReportProcessor::new(vec![Box::new(probe_a), Box::new(probe_b)]).unwrap();

    let records = ["Ink", "B", "C"]
        .into_iter()
        .map(|recipe| Ok(record("10120", recipe, "Sunday 1PM - 3PM")));
    processor.process(records).unwrap();

    assert_eq!(state_a.borrow().consumed, vec!["Ink", "B", "C"]);
    assert_eq!(state_b.borrow().consumed, vec!["Ink", "B", "C"]);
    assert!(state_a.borrow().finalized);
    assert!(state_b.borrow().finalized);
}

#[test]
fn test_source_error_aborts_before_any_finalize() {
    let (probe, state) = ProbeSubject::new();
    let processor = ReportProcessor::new(vec![Box::new(probe)]).unwrap();

    let records: Vec<Result<_>> = vec![
        Ok(record("10120", "Ink", "Sunday 1PM - 3PM")),
        Err(Error::record_format("malformed delivery window 'Funday'")),
        Ok(record("10120", "B", "Sunday 1PM - 3PM")),
    ];
    let result = processor.process(records);

    assert!(matches!(result, Err(Error::RecordFormat { .. })));
    // The record before the error was consumed, but nothing finalized
    assert_eq!(state.borrow().consumed, vec!["Ink"]);
    assert!(!state.borrow().finalized);
}

#[test]
fn test_multiple_real_subjects_fill_independent_fields() {
    let subjects: Vec<Box<dyn ReportSubject>> = vec![
        Box::new(UniqueRecipeCounter::new()),
        Box::new(CounterPerRecipe::new()),
    ];
    let processor = ReportProcessor::new(subjects).unwrap();

    let records = ["Ink", "Ink", "A"]
        .into_iter()
        .map(|recipe| Ok(record("10120", recipe, "Sunday 1PM - 3PM")));
    let report = processor.process(records).unwrap();

    assert_eq!(report.unique_recipe_count, Some(2));
    assert_eq!(report.count_per_recipe.len(), 2);
    assert!(report.busiest_postcode.is_none());
}

#[test]
fn test_empty_source_still_finalizes() {
    let processor =
        ReportProcessor::new(vec![Box::new(UniqueRecipeCounter::new())]).unwrap();
    let report = processor.process(std::iter::empty()).unwrap();
    assert_eq!(report.unique_recipe_count, Some(0));
}

#[test]
fn test_subject_count() {
    let processor = ReportProcessor::new(vec![
        Box::new(UniqueRecipeCounter::new()),
        Box::new(CounterPerRecipe::new()),
    ])
    .unwrap();
    assert_eq!(processor.subject_count(), 2);
}
