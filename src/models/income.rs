//! Income source records
//!
//! An income source is either a recurring salary on a pay frequency or a
//! one-off receipt. Sources are soft-deleted (deactivated) rather than
//! removed, so historical summaries keep their inputs. Partner income a
//! user keys in by hand carries `is_manual_partner_income` so ownership
//! filtering attributes it to the partner rather than the record creator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{IncomeSourceId, UserId};
use super::money::Money;

/// How often a recurring salary pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Yearly,
}

impl PayFrequency {
    /// Fixed cycle length in days used by the income normalizer's
    /// day-ratio proration rule
    pub const fn cycle_days(&self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Fortnightly => 14,
            Self::Monthly => 30,
            Self::Quarterly => 91,
            Self::Yearly => 365,
        }
    }
}

/// Whether a source recurs or lands once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeSourceType {
    RecurringSalary,
    OneOff,
}

/// An income source attached to one partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    pub amount: Money,
    pub frequency: PayFrequency,
    pub source_type: IncomeSourceType,
    pub owner_user_id: UserId,
    /// Entered by the budget owner on the partner's behalf
    #[serde(default)]
    pub is_manual_partner_income: bool,
    #[serde(default)]
    pub is_received: bool,
    #[serde(default)]
    pub received_date: Option<NaiveDate>,
    /// Soft-delete flag; inactive sources contribute nothing
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl IncomeSource {
    /// Create an active recurring salary
    pub fn recurring(owner: UserId, amount: Money, frequency: PayFrequency) -> Self {
        Self {
            id: IncomeSourceId::new(),
            amount,
            frequency,
            source_type: IncomeSourceType::RecurringSalary,
            owner_user_id: owner,
            is_manual_partner_income: false,
            is_received: false,
            received_date: None,
            active: true,
        }
    }

    /// Create an active one-off receipt
    pub fn one_off(owner: UserId, amount: Money, received_date: Option<NaiveDate>) -> Self {
        Self {
            id: IncomeSourceId::new(),
            amount,
            frequency: PayFrequency::Monthly,
            source_type: IncomeSourceType::OneOff,
            owner_user_id: owner,
            is_manual_partner_income: false,
            is_received: received_date.is_some(),
            received_date,
            active: true,
        }
    }

    /// Whether this source belongs to the partner, from the viewer's side
    pub fn is_partner_income(&self, viewer: UserId) -> bool {
        self.owner_user_id != viewer || self.is_manual_partner_income
    }
}
