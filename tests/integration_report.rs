//! Integration tests for the file-to-report pipeline
//!
//! These tests exercise the full path a CLI run takes: write a JSON source
//! file, decode it through the file adapter, fan it out to a set of report
//! subjects and check the report JSON that would be emitted.

use recipe_reporter::app::adapters::json_file::JsonFileSource;
use recipe_reporter::app::services::report_processor::ReportProcessor;
use recipe_reporter::app::services::report_subjects::{
    BusiestPostcodeFinder, CounterPerRecipe, PostcodeTimeRangeCounter, RecipeNameMatcher,
    ReportSubject, UniqueRecipeCounter,
};
use recipe_reporter::{Error, Hour};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_DELIVERIES: &str = r#"[
    {"postcode": "10224", "recipe": "Creamy Dill Chicken", "delivery": "Thursday 7AM - 5PM"},
    {"postcode": "10208", "recipe": "Speedy Steak Fajitas", "delivery": "Wednesday 1AM - 7PM"},
    {"postcode": "10120", "recipe": "Cherry Balsamic Pork Chops", "delivery": "Thursday 7AM - 9PM"},
    {"postcode": "10120", "recipe": "Cherry Balsamic Pork Chops", "delivery": "Saturday 1AM - 8PM"},
    {"postcode": "10120", "recipe": "Mediterranean Baked Veggies", "delivery": "Monday 10AM - 3PM"},
    {"postcode": "10224", "recipe": "Speedy Steak Fajitas", "delivery": "Thursday 7AM - 5PM"}
]"#;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn all_subjects() -> Vec<Box<dyn ReportSubject>> {
    vec![
        Box::new(UniqueRecipeCounter::new()),
        Box::new(CounterPerRecipe::new()),
        Box::new(BusiestPostcodeFinder::new()),
        Box::new(
            RecipeNameMatcher::new(vec!["Veggie".to_string(), "Pork".to_string()]).unwrap(),
        ),
        Box::new(PostcodeTimeRangeCounter::new(
            "10120",
            Hour::new(9).unwrap(),
            Hour::new(21).unwrap(),
        )),
    ]
}

#[test]
fn test_full_pipeline_produces_expected_report_json() {
    let file = source_file(SAMPLE_DELIVERIES);

    let source = JsonFileSource::open(file.path()).unwrap();
    let processor = ReportProcessor::new(all_subjects()).unwrap();
    let report = processor.process(source.into_records()).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        json!({
            "unique_recipe_count": 4,
            "count_per_recipe": [
                {"recipe": "Cherry Balsamic Pork Chops", "count": 2},
                {"recipe": "Creamy Dill Chicken", "count": 1},
                {"recipe": "Mediterranean Baked Veggies", "count": 1},
                {"recipe": "Speedy Steak Fajitas", "count": 2}
            ],
            "busiest_postcode": {"postcode": "10120", "delivery_count": 3},
            "count_per_postcode_and_time": {
                "postcode": "10120",
                "from": "9AM",
                "to": "9PM",
                "delivery_count": 1
            },
            "match_by_name": [
                "Cherry Balsamic Pork Chops",
                "Mediterranean Baked Veggies"
            ]
        })
    );
}

#[test]
fn test_single_subject_report_carries_only_its_field() {
    let file = source_file(SAMPLE_DELIVERIES);

    let source = JsonFileSource::open(file.path()).unwrap();
    let processor =
        ReportProcessor::new(vec![Box::new(UniqueRecipeCounter::new())]).unwrap();
    let report = processor.process(source.into_records()).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value, json!({"unique_recipe_count": 4}));
}

#[test]
fn test_empty_source_suppresses_all_but_unique_count() {
    let file = source_file("[]");

    let source = JsonFileSource::open(file.path()).unwrap();
    let processor = ReportProcessor::new(all_subjects()).unwrap();
    let report = processor.process(source.into_records()).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value, json!({"unique_recipe_count": 0}));
}

#[test]
fn test_zero_time_range_count_is_suppressed() {
    let file = source_file(SAMPLE_DELIVERIES);

    let source = JsonFileSource::open(file.path()).unwrap();
    // No window for this postcode fits inside one hour
    let processor = ReportProcessor::new(vec![Box::new(PostcodeTimeRangeCounter::new(
        "10120",
        Hour::new(11).unwrap(),
        Hour::new(12).unwrap(),
    ))])
    .unwrap();
    let report = processor.process(source.into_records()).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_malformed_source_aborts_with_decoding_error() {
    let file = source_file(r#"[{"postcode": "1", "recipe": "Ink", "delivery": "nonsense"}]"#);

    let result = JsonFileSource::open(file.path());
    assert!(matches!(result, Err(Error::JsonDecoding { .. })));
}

#[test]
fn test_missing_source_file_aborts_run() {
    let result = JsonFileSource::open("/definitely/not/here.json");
    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
}
