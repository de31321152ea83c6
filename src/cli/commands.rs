//! Command execution for the recipe reporter CLI
//!
//! Wires the CLI surface to the library: sets up logging, turns the selected
//! flags into report subjects, runs the single processing pass and emits the
//! report JSON to stdout or a file.

use crate::app::adapters::json_file::JsonFileSource;
use crate::app::services::report_processor::{Report, ReportProcessor};
use crate::app::services::report_subjects::{
    BusiestPostcodeFinder, CounterPerRecipe, PostcodeTimeRangeCounter, RecipeNameMatcher,
    ReportSubject, UniqueRecipeCounter,
};
use crate::cli::args::Args;
use crate::{Error, Result};
use colored::Colorize;
use std::io::Write;
use tracing::{debug, info};

/// Main command runner for the recipe reporter
///
/// Orchestrates the whole run:
/// 1. Set up logging from the verbosity flags
/// 2. Validate arguments and build the subject list
/// 3. Decode the source file and drive the single processing pass
/// 4. Emit the report JSON
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting recipe reporter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let subjects = build_subjects(&args)?;
    let processor = ReportProcessor::new(subjects)?;
    info!("Selected {} report subjects", processor.subject_count());

    let source = JsonFileSource::open(&args.source)?;
    info!(
        "Decoded {} delivery records from '{}'",
        source.len(),
        source.path().display()
    );

    let record_count = source.len();
    let report = processor.process(source.into_records())?;
    emit_report(&args, &report)?;

    if !args.quiet {
        eprintln!(
            "{} {} records aggregated",
            "Done:".bright_green().bold(),
            record_count.to_string().bright_white().bold()
        );
    }
    Ok(())
}

/// Build the report subject list from the selected flags
///
/// Subjects are assembled in flag-declaration order, which fixes the fan-out
/// order for reproducible traces. Selecting no flags is caught by
/// [`Args::validate`] before this runs, but the empty list is rejected again
/// by the processor constructor.
pub fn build_subjects(args: &Args) -> Result<Vec<Box<dyn ReportSubject>>> {
    let mut subjects: Vec<Box<dyn ReportSubject>> = Vec::new();

    if args.unique_recipe_count {
        subjects.push(Box::new(UniqueRecipeCounter::new()));
    }
    if args.count_per_recipe {
        subjects.push(Box::new(CounterPerRecipe::new()));
    }
    if args.busiest_postcode {
        subjects.push(Box::new(BusiestPostcodeFinder::new()));
    }
    if let Some(list) = &args.find_recipes {
        subjects.push(Box::new(RecipeNameMatcher::new(list.names.clone())?));
    }
    if let Some(query) = &args.deliveries_by_postcode_and_time {
        subjects.push(Box::new(PostcodeTimeRangeCounter::new(
            query.postcode.clone(),
            query.from,
            query.to,
        )));
    }

    Ok(subjects)
}

/// Serialize the report and write it to the configured destination
fn emit_report(args: &Args, report: &Report) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path).map_err(|e| {
                Error::io(format!("failed to create output file '{}'", path.display()), e)
            })?;
            writeln!(file, "{}", json)
                .map_err(|e| Error::io("failed to write report", e))?;
            info!("Report written to '{}'", path.display());
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}

/// Set up logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recipe_reporter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
