//! The `summarize` command
//!
//! Reads a snapshot file containing a `BudgetSummaryInput`, runs the
//! engine, and prints the result. This is the batch-caller role: the
//! snapshot is assembled elsewhere; the binary only adapts it onto the
//! pure engine.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format_summary;
use crate::engine::{annotate, summarize, validate_customization, BudgetSummaryInput, NameIndex};
use crate::error::{BudgetError, BudgetResult};

/// Arguments for the summarize command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the snapshot JSON file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Load a snapshot file and reject invalid boundary inputs
///
/// Methodology customizations are validated here, before the engine runs,
/// matching the write-time contract: the engine never merges an invalid
/// customization.
pub fn load_snapshot(path: &PathBuf) -> BudgetResult<BudgetSummaryInput> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| BudgetError::Snapshot(format!("Failed to read {}: {}", path.display(), e)))?;

    let input: BudgetSummaryInput = serde_json::from_str(&contents)
        .map_err(|e| BudgetError::Snapshot(format!("Failed to parse {}: {}", path.display(), e)))?;

    if let Some(customization) = &input.methodology_customization {
        validate_customization(input.methodology, customization)?;
    }

    Ok(input)
}

/// Handle the summarize command
pub fn handle_summarize_command(settings: &Settings, args: SummarizeArgs) -> BudgetResult<()> {
    let input = load_snapshot(&args.input)?;
    let summary = summarize(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let index = NameIndex::build(&input.goals, &input.assets, &input.category_mappings);
    let annotated = annotate(&summary, &index);
    let hidden = input
        .methodology_customization
        .as_ref()
        .map(|c| c.hidden_subcategories.clone())
        .unwrap_or_default();

    print!(
        "{}",
        format_summary(&annotated, &settings.currency_symbol, &hidden)
    );
    Ok(())
}
