//! Core data models
//!
//! Snapshot record types the summary engine consumes, plus the shared
//! `Money` and period primitives. Everything here is plain data: records
//! are read-only inputs handed over by the caller per invocation.

pub mod assignment;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod split;
pub mod transaction;

pub use assignment::{Assignment, AssignmentType};
pub use category::{CategoryMapping, UNCATEGORIZED};
pub use expense::{ExpenseDefinition, RecurrenceType};
pub use goal::{Asset, AssetContribution, Goal};
pub use ids::{
    AccountId, AssetId, ExpenseDefinitionId, GoalId, IncomeSourceId, RawCategoryId, TransactionId,
    UserId,
};
pub use income::{IncomeSource, IncomeSourceType, PayFrequency};
pub use money::Money;
pub use period::{
    month_key, month_key_string, step_period, Period, PeriodType, StepDirection,
};
pub use split::{SplitScope, SplitSetting, SplitType};
pub use transaction::Transaction;
