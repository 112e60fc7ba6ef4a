//! Bank-feed transaction records
//!
//! Transactions arrive read-only from the aggregation feed. Expense amounts
//! are negative; deposits are positive. Internal transfers (between the
//! household's own accounts) never count as spending, but transfers into a
//! goal's linked account are how goal contributions are measured.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, ExpenseDefinitionId, RawCategoryId, TransactionId};
use super::money::Money;

/// A settled bank transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Money,
    pub raw_category_id: RawCategoryId,
    pub settled_at: NaiveDate,
    /// Account the transaction settled against, when the feed provides it
    #[serde(default)]
    pub account_id: Option<AccountId>,
    #[serde(default)]
    pub is_internal_transfer: bool,
    /// Set when a recurring-expense matcher has claimed this transaction
    #[serde(default)]
    pub matched_expense_definition_id: Option<ExpenseDefinitionId>,
}

impl Transaction {
    /// Create a transaction with the fields the engine reads
    pub fn new(amount: Money, raw_category_id: RawCategoryId, settled_at: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            raw_category_id,
            settled_at,
            account_id: None,
            is_internal_transfer: false,
            matched_expense_definition_id: None,
        }
    }

    /// Whether this transaction counts toward spending totals
    ///
    /// Only settled outflows count; transfers between own accounts and
    /// deposits are excluded.
    pub fn is_spending(&self) -> bool {
        self.amount.is_negative() && !self.is_internal_transfer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_spending() {
        let mut txn = Transaction::new(
            Money::from_cents(-4500),
            RawCategoryId::new("groceries-7001"),
            date(2025, 6, 10),
        );
        assert!(txn.is_spending());

        txn.is_internal_transfer = true;
        assert!(!txn.is_spending());
    }

    #[test]
    fn test_deposits_are_not_spending() {
        let txn = Transaction::new(
            Money::from_cents(250_000),
            RawCategoryId::new("salary-1"),
            date(2025, 6, 1),
        );
        assert!(!txn.is_spending());
    }

    #[test]
    fn test_serde_round_trip() {
        let txn = Transaction::new(
            Money::from_cents(-1999),
            RawCategoryId::new("streaming-42"),
            date(2025, 6, 3),
        );
        let json = serde_json::to_string(&txn).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, txn.id);
        assert_eq!(parsed.amount, txn.amount);
        assert!(parsed.account_id.is_none());
    }
}
