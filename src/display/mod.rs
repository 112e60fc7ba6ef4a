//! Terminal output formatting

pub mod summary;

pub use summary::format_summary;
