//! Budget assignment records
//!
//! One assignment row exists per category, goal, or asset per budget per
//! calendar month (weekly and fortnightly budgets share their month's
//! assignment set). The engine reads only the rows keyed to the summarized
//! period's month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AssetId, GoalId};
use super::money::Money;

/// What an assignment funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Category,
    Goal,
    Asset,
}

/// An amount assigned for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub category_name: String,
    #[serde(default)]
    pub subcategory_name: Option<String>,
    pub assigned: Money,
    pub assignment_type: AssignmentType,
    #[serde(default)]
    pub goal_id: Option<GoalId>,
    #[serde(default)]
    pub asset_id: Option<AssetId>,
    /// First day of the month this assignment belongs to
    pub month_key: NaiveDate,
}

impl Assignment {
    /// Assignment to a category/subcategory pair
    pub fn category(
        category_name: impl Into<String>,
        subcategory_name: Option<String>,
        assigned: Money,
        month_key: NaiveDate,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            subcategory_name,
            assigned,
            assignment_type: AssignmentType::Category,
            goal_id: None,
            asset_id: None,
            month_key,
        }
    }

    /// Assignment funding a savings goal
    pub fn goal(goal_id: GoalId, assigned: Money, month_key: NaiveDate) -> Self {
        Self {
            category_name: String::new(),
            subcategory_name: None,
            assigned,
            assignment_type: AssignmentType::Goal,
            goal_id: Some(goal_id),
            asset_id: None,
            month_key,
        }
    }

    /// Assignment funding an investment asset
    pub fn asset(asset_id: AssetId, assigned: Money, month_key: NaiveDate) -> Self {
        Self {
            category_name: String::new(),
            subcategory_name: None,
            assigned,
            assignment_type: AssignmentType::Asset,
            goal_id: None,
            asset_id: Some(asset_id),
            month_key,
        }
    }

    /// The subcategory this assignment lands in; rows without one attach
    /// to a subcategory named after the parent
    pub fn effective_subcategory(&self) -> &str {
        self.subcategory_name.as_deref().unwrap_or(&self.category_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_category_constructor() {
        let a = Assignment::category("Food", Some("Groceries".into()), Money::from_cents(40_000), june());
        assert_eq!(a.assignment_type, AssignmentType::Category);
        assert_eq!(a.effective_subcategory(), "Groceries");
        assert!(a.goal_id.is_none());
    }

    #[test]
    fn test_effective_subcategory_falls_back_to_parent() {
        let a = Assignment::category("Transport", None, Money::from_cents(10_000), june());
        assert_eq!(a.effective_subcategory(), "Transport");
    }

    #[test]
    fn test_goal_constructor() {
        let goal_id = GoalId::new();
        let a = Assignment::goal(goal_id, Money::from_cents(50_000), june());
        assert_eq!(a.assignment_type, AssignmentType::Goal);
        assert_eq!(a.goal_id, Some(goal_id));
        assert!(a.category_name.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let a = Assignment::asset(AssetId::new(), Money::from_cents(25_000), june());
        let json = serde_json::to_string(&a).unwrap();
        let parsed: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.assignment_type, AssignmentType::Asset);
        assert_eq!(parsed.asset_id, a.asset_id);
        assert_eq!(parsed.month_key, june());
    }
}
