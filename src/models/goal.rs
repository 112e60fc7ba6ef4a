//! Savings goals and investment assets
//!
//! Goals and assets are funded through assignments like categories, but
//! their rows are tracked separately from category math. A goal may link a
//! bank account; transfers into that account within the period count as
//! contributions. Asset contributions arrive as explicit records from the
//! investment feed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, AssetId, GoalId};
use super::money::Money;

/// A savings goal with a target amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    pub current: Money,
    /// Transfers into this account count as contributions
    #[serde(default)]
    pub linked_account_id: Option<AccountId>,
}

impl Goal {
    /// Create a goal with nothing saved yet
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            current: Money::zero(),
            linked_account_id: None,
        }
    }

    /// Link the goal to a bank account
    pub fn with_linked_account(mut self, account_id: AccountId) -> Self {
        self.linked_account_id = Some(account_id);
        self
    }
}

/// An investment asset being tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub current_value: Money,
    #[serde(default)]
    pub target_value: Option<Money>,
}

impl Asset {
    /// Create an asset at its current value
    pub fn new(name: impl Into<String>, current_value: Money) -> Self {
        Self {
            id: AssetId::new(),
            name: name.into(),
            current_value,
            target_value: None,
        }
    }
}

/// A contribution into an asset, as reported by the investment feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetContribution {
    pub asset_id: AssetId,
    pub amount: Money,
    pub date: NaiveDate,
}
