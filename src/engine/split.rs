//! Ownership splitting
//!
//! Resolves the viewing partner's share of a shared amount when a budget is
//! viewed in individual mode. Lookup precedence: a setting scoped to the
//! specific expense definition, else one scoped to the category
//! (subcategory name first, then parent name), else the partnership
//! default, else an equal split.
//!
//! The same resolver is applied to the spent and budgeted sides of a row so
//! the two stay comparable.

use std::collections::HashMap;

use crate::models::{ExpenseDefinitionId, Money, SplitScope, SplitSetting};

/// View mode for a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetView {
    /// Full shared amounts, no splitting
    #[default]
    Shared,
    /// The viewing partner's share only
    Individual,
}

/// Split settings indexed for lookup
#[derive(Debug)]
pub struct SplitResolver<'a> {
    by_expense: HashMap<ExpenseDefinitionId, &'a SplitSetting>,
    by_category: HashMap<&'a str, &'a SplitSetting>,
    default: Option<&'a SplitSetting>,
}

impl<'a> SplitResolver<'a> {
    /// Index the active split settings
    ///
    /// The store keeps one row per scope key; if duplicates slip through,
    /// the first row wins so resolution stays deterministic.
    pub fn from_settings(settings: &'a [SplitSetting]) -> Self {
        let mut by_expense = HashMap::new();
        let mut by_category = HashMap::new();
        let mut default = None;

        for setting in settings {
            match &setting.scope {
                SplitScope::ExpenseDefinition(id) => {
                    by_expense.entry(*id).or_insert(setting);
                }
                SplitScope::Category(name) => {
                    by_category.entry(name.as_str()).or_insert(setting);
                }
                SplitScope::Default => {
                    default.get_or_insert(setting);
                }
            }
        }

        Self {
            by_expense,
            by_category,
            default,
        }
    }

    /// The most specific setting for a spend or assignment
    fn lookup(
        &self,
        expense_definition_id: Option<ExpenseDefinitionId>,
        subcategory_name: &str,
        parent_name: &str,
    ) -> Option<&SplitSetting> {
        if let Some(id) = expense_definition_id {
            if let Some(setting) = self.by_expense.get(&id) {
                return Some(setting);
            }
        }
        if let Some(setting) = self.by_category.get(subcategory_name) {
            return Some(setting);
        }
        if let Some(setting) = self.by_category.get(parent_name) {
            return Some(setting);
        }
        self.default
    }

    /// The viewer's share of an amount
    ///
    /// `viewer_is_owner` selects which side of the rule the viewer is on.
    /// With no matching setting the split defaults to equal.
    pub fn viewer_share(
        &self,
        amount: Money,
        expense_definition_id: Option<ExpenseDefinitionId>,
        subcategory_name: &str,
        parent_name: &str,
        viewer_is_owner: bool,
    ) -> Money {
        let owner_percent = self
            .lookup(expense_definition_id, subcategory_name, parent_name)
            .map(|setting| setting.owner_share_percent())
            .unwrap_or(50.0);

        let viewer_percent = if viewer_is_owner {
            owner_percent
        } else {
            100.0 - owner_percent
        };

        amount.share(viewer_percent)
    }
}
