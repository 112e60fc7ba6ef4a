//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine layer.

pub mod methodology;
pub mod period;
pub mod summarize;

pub use methodology::{handle_methodology_command, MethodologyCommands};
pub use period::{handle_period_command, PeriodCommands};
pub use summarize::{handle_summarize_command, SummarizeArgs};
