//! Ownership split settings
//!
//! Split settings apportion a shared amount between the two partners when a
//! budget is viewed in individual mode. A setting is scoped to one expense
//! definition, one category name, or the partnership default; the most
//! specific scope wins. The store keeps at most one active row per scope
//! key (delete-then-insert, because the natural key has nullable columns),
//! so the engine treats the first match per key as authoritative.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseDefinitionId;

/// What a split setting applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "key", rename_all = "kebab-case")]
pub enum SplitScope {
    ExpenseDefinition(ExpenseDefinitionId),
    Category(String),
    Default,
}

/// How the amount is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitType {
    /// 50/50
    Equal,
    /// `owner_percentage` to the owner, the remainder to the partner
    Custom,
    /// Entirely the owner's
    IndividualOwner,
    /// Entirely the partner's
    IndividualPartner,
}

/// One split rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSetting {
    #[serde(flatten)]
    pub scope: SplitScope,
    pub split_type: SplitType,
    /// Owner's share on the 0-100 scale; only meaningful for `Custom`
    #[serde(default)]
    pub owner_percentage: Option<f64>,
}

impl SplitSetting {
    /// An equal split at the given scope
    pub fn equal(scope: SplitScope) -> Self {
        Self {
            scope,
            split_type: SplitType::Equal,
            owner_percentage: None,
        }
    }

    /// A custom split giving the owner `owner_percentage` percent
    pub fn custom(scope: SplitScope, owner_percentage: f64) -> Self {
        Self {
            scope,
            split_type: SplitType::Custom,
            owner_percentage: Some(owner_percentage),
        }
    }

    /// The owner's share of an amount under this rule, on the 0-100 scale
    pub fn owner_share_percent(&self) -> f64 {
        match self.split_type {
            SplitType::Equal => 50.0,
            SplitType::Custom => self.owner_percentage.unwrap_or(50.0),
            SplitType::IndividualOwner => 100.0,
            SplitType::IndividualPartner => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_share_percent() {
        assert_eq!(SplitSetting::equal(SplitScope::Default).owner_share_percent(), 50.0);
        assert_eq!(
            SplitSetting::custom(SplitScope::Category("Groceries".into()), 70.0)
                .owner_share_percent(),
            70.0
        );

        let owner_only = SplitSetting {
            scope: SplitScope::Default,
            split_type: SplitType::IndividualOwner,
            owner_percentage: None,
        };
        assert_eq!(owner_only.owner_share_percent(), 100.0);

        let partner_only = SplitSetting {
            scope: SplitScope::Default,
            split_type: SplitType::IndividualPartner,
            owner_percentage: None,
        };
        assert_eq!(partner_only.owner_share_percent(), 0.0);
    }

    #[test]
    fn test_custom_without_percentage_falls_back_to_equal() {
        let setting = SplitSetting {
            scope: SplitScope::Default,
            split_type: SplitType::Custom,
            owner_percentage: None,
        };
        assert_eq!(setting.owner_share_percent(), 50.0);
    }

    #[test]
    fn test_scope_serde_shape() {
        let setting = SplitSetting::custom(SplitScope::Category("Groceries".into()), 70.0);
        let json = serde_json::to_string(&setting).unwrap();
        assert!(json.contains(r#""scope":"category""#));
        assert!(json.contains(r#""key":"Groceries""#));

        let parsed: SplitSetting = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scope, SplitScope::Category("Groceries".into()));
        assert_eq!(parsed.owner_percentage, Some(70.0));
    }

    #[test]
    fn test_default_scope_serde() {
        let setting = SplitSetting::equal(SplitScope::Default);
        let json = serde_json::to_string(&setting).unwrap();
        let parsed: SplitSetting = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scope, SplitScope::Default);
    }
}
