//! The `methodology` command
//!
//! Lists the methodology presets, shows a preset's groupings, and
//! validates a customization file against the write-time rules.

use std::path::PathBuf;

use clap::Subcommand;

use crate::engine::{
    preset_sections, resolve_sections, validate_customization, MethodologyCustomization,
    MethodologyKind,
};
use crate::error::{BudgetError, BudgetResult};

/// Methodology commands
#[derive(Subcommand, Debug)]
pub enum MethodologyCommands {
    /// List the available methodologies
    List,
    /// Show a methodology's groupings
    Show {
        /// Methodology name (e.g. "50-30-20")
        name: String,
    },
    /// Validate a customization file and preview the merged groupings
    Validate {
        /// Methodology name the customization applies to
        name: String,
        /// Path to the customization JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Handle a methodology command
pub fn handle_methodology_command(command: MethodologyCommands) -> BudgetResult<()> {
    match command {
        MethodologyCommands::List => {
            for kind in MethodologyKind::all() {
                let marker = if kind.is_percentage_based() {
                    " (percentage-based)"
                } else {
                    ""
                };
                println!("{}{}", kind, marker);
            }
        }
        MethodologyCommands::Show { name } => {
            let kind: MethodologyKind = name.parse()?;
            for section in preset_sections(kind) {
                print_section_line(&section.name, section.percentage, &section.underlying_categories);
            }
        }
        MethodologyCommands::Validate { name, file } => {
            let kind: MethodologyKind = name.parse()?;
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                BudgetError::Io(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let customization: MethodologyCustomization = serde_json::from_str(&contents)?;

            validate_customization(kind, &customization)?;

            println!("Customization is valid. Merged groupings:");
            for section in resolve_sections(kind, Some(&customization)) {
                print_section_line(&section.name, section.percentage, &section.underlying_categories);
            }
        }
    }
    Ok(())
}

fn print_section_line(name: &str, percentage: Option<f64>, underlying: &[String]) {
    match percentage {
        Some(pct) => println!("{} ({:.0}%): {}", name, pct, underlying.join(", ")),
        None => println!("{}: {}", name, underlying.join(", ")),
    }
}
