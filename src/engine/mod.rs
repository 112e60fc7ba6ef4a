//! The budget summary calculation engine
//!
//! A pure, synchronous pipeline over an input snapshot: period framing and
//! income normalization feed category classification, methodology grouping,
//! and ownership splitting, all folded together by the aggregator in
//! `summary`. Identical inputs produce bit-identical outputs; nothing here
//! performs I/O, reads ambient state, or mutates its inputs.

pub mod annotate;
pub mod income;
pub mod methodology;
pub mod split;
pub mod summary;
pub mod taxonomy;

pub use annotate::{annotate, AnnotatedRow, AnnotatedSummary, NameIndex};
pub use income::{normalized_income, IncomeScope};
pub use methodology::{
    preset_sections, resolve_sections, validate_customization, CustomCategory,
    MethodologyCustomization, MethodologyKind, MethodologySection, MODERN_CATEGORIES,
};
pub use split::{BudgetView, SplitResolver};
pub use summary::{
    summarize, BudgetSummary, BudgetSummaryInput, CarryoverMode, RowKind, SummaryRow,
};
pub use taxonomy::{CategoryTaxonomy, ResolvedCategory};
