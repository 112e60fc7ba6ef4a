//! Tandem - Budget summary calculation engine for shared household budgets
//!
//! This library computes a single consistent picture of a budgeting period
//! from a snapshot of raw records: total income, total assigned, total
//! spent, carryover, and a per-row breakdown across categories, savings
//! goals, and investment assets. The computation is pure and synchronous;
//! two callers handing in identical snapshots get bit-identical summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management for the binary
//! - `error`: Custom error types
//! - `models`: Core data models (periods, money, snapshot records)
//! - `engine`: The pure summary pipeline (income, taxonomy, methodology,
//!   splitting, aggregation, annotation)
//! - `display`: Terminal rendering of summaries
//! - `cli`: Command handlers for the `tandem` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use tandem_budget::engine::{summarize, BudgetSummaryInput};
//!
//! let input: BudgetSummaryInput = serde_json::from_str(&snapshot)?;
//! let summary = summarize(&input);
//! println!("{}", summary.to_be_budgeted);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;

pub use error::{BudgetError, BudgetResult};
