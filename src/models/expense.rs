//! Recurring expense definitions
//!
//! A definition describes a recurring bill (rent, utilities, subscriptions)
//! by its expected amount and cadence. Its category is not stored: it is
//! inferred from the categories of the transactions the matcher has linked
//! to it, by majority vote (see the taxonomy resolver).

use serde::{Deserialize, Serialize};

use super::ids::{ExpenseDefinitionId, TransactionId};
use super::money::Money;

/// Cadence of a recurring expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Yearly,
}

/// A recurring expense definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDefinition {
    pub id: ExpenseDefinitionId,
    pub expected_amount: Money,
    pub recurrence: RecurrenceType,
    /// Transactions the matcher has linked to this bill, oldest first.
    /// Order matters: category inference breaks ties by first encounter.
    #[serde(default)]
    pub matched_transaction_ids: Vec<TransactionId>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ExpenseDefinition {
    /// Create an active definition with no matches yet
    pub fn new(expected_amount: Money, recurrence: RecurrenceType) -> Self {
        Self {
            id: ExpenseDefinitionId::new(),
            expected_amount,
            recurrence,
            matched_transaction_ids: Vec::new(),
            active: true,
        }
    }
}
