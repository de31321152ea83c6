//! Command-line argument definitions for the recipe reporter
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Each report flag activates one report subject; list-valued flags parse
//! through `FromStr` wrapper types so malformed selections are rejected
//! before any processing begins.

use crate::app::models::Hour;
use crate::constants::POSTCODE_TIME_QUERY_PARTS;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the recipe delivery reporter
///
/// Aggregates recipe delivery records from a JSON source file into a
/// combined report, with one section per selected report flag.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recipe-reporter",
    version,
    about = "Aggregate recipe delivery records into selectable JSON reports",
    long_about = "Reads a JSON array of recipe delivery records (postcode, recipe name, weekly \
                  delivery window) and produces a combined report in a single pass over the \
                  input. Each report flag activates one independent section: unique recipe \
                  count, per-recipe delivery counts, busiest postcode, recipe name matching, \
                  and per-postcode time-range delivery counts."
)]
pub struct Args {
    /// Path to the JSON source file
    ///
    /// Must contain a single JSON array of objects with `postcode`, `recipe`
    /// and `delivery` fields, the latter in `<Weekday> <from> - <to>` form,
    /// e.g. "Thursday 7AM - 5PM".
    #[arg(
        short = 's',
        long = "source",
        value_name = "FILE",
        help = "Path to the JSON source file of delivery records"
    )]
    pub source: PathBuf,

    /// Report the number of distinct recipe names
    #[arg(
        long = "unique-recipe-count",
        help = "Report the number of unique recipe names"
    )]
    pub unique_recipe_count: bool,

    /// Report the delivery count of every recipe, sorted by recipe name
    #[arg(
        long = "count-per-recipe",
        help = "Report delivery counts per recipe name"
    )]
    pub count_per_recipe: bool,

    /// Report the postcode with the most distinct delivery windows
    #[arg(long = "busiest-postcode", help = "Report the busiest postcode")]
    pub busiest_postcode: bool,

    /// Report recipe names containing any of the given substrings
    ///
    /// Comma-separated, case-sensitive substrings; entries are trimmed and
    /// empty entries dropped. Example: --find-recipes='Potato,Veggie,Mushroom'
    #[arg(
        long = "find-recipes",
        value_name = "LIST",
        help = "Report recipes matching comma-separated name substrings"
    )]
    pub find_recipes: Option<RecipeNameList>,

    /// Report the delivery count for a postcode within an hour range
    ///
    /// Three comma-separated parts: postcode, from hour, to hour. Hours accept
    /// 12-hour ("10AM") or 24-hour ("22") text. Example:
    /// --deliveries-by-postcode-and-time='10120,10AM,3PM'
    #[arg(
        long = "deliveries-by-postcode-and-time",
        value_name = "POSTCODE,FROM,TO",
        help = "Report deliveries for a postcode within an hour range"
    )]
    pub deliveries_by_postcode_and_time: Option<PostcodeTimeQuery>,

    /// Output file for the report JSON
    ///
    /// If not specified, the report is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the report JSON to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    /// Pretty-print the report JSON
    #[arg(long = "pretty", help = "Pretty-print the report JSON")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Wrapper for parsing comma-separated recipe name filters
#[derive(Debug, Clone)]
pub struct RecipeNameList {
    pub names: Vec<String>,
}

impl FromStr for RecipeNameList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<String> = s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Err(Error::selection(
                "recipe name list cannot be empty".to_string(),
            ));
        }

        Ok(RecipeNameList { names })
    }
}

/// Wrapper for parsing a `postcode,from,to` delivery count query
#[derive(Debug, Clone)]
pub struct PostcodeTimeQuery {
    pub postcode: String,
    pub from: Hour,
    pub to: Hour,
}

impl FromStr for PostcodeTimeQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(|part| part.trim()).collect();
        if parts.len() != POSTCODE_TIME_QUERY_PARTS {
            return Err(Error::selection(format!(
                "expected postcode,from,to but got {} part(s) in '{}'",
                parts.len(),
                s
            )));
        }
        if parts[0].is_empty() {
            return Err(Error::selection(format!("empty postcode in '{}'", s)));
        }

        let from: Hour = parts[1]
            .parse()
            .map_err(|e| Error::selection(format!("bad from hour in '{}': {}", s, e)))?;
        let to: Hour = parts[2]
            .parse()
            .map_err(|e| Error::selection(format!("bad to hour in '{}': {}", s, e)))?;

        Ok(PostcodeTimeQuery {
            postcode: parts[0].to_string(),
            from,
            to,
        })
    }
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.source.exists() {
            return Err(Error::source_not_found(
                self.source.display().to_string(),
            ));
        }
        if self.source.is_dir() {
            return Err(Error::selection(format!(
                "source path is a directory, not a file: {}",
                self.source.display()
            )));
        }

        if !self.selects_any_subject() {
            return Err(Error::selection(
                "no report subjects selected; choose at least one report flag".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether at least one report flag was given
    pub fn selects_any_subject(&self) -> bool {
        self.unique_recipe_count
            || self.count_per_recipe
            || self.busiest_postcode
            || self.find_recipes.is_some()
            || self.deliveries_by_postcode_and_time.is_some()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
