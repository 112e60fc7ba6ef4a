//! Display annotation for engine output
//!
//! The aggregator emits goal and asset rows by id only. Annotation is a
//! separate pure stage: it takes the engine's immutable output plus a
//! read-only name/icon index and returns a new structure with display
//! names filled in. Engine output is never mutated in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Asset, AssetId, CategoryMapping, Goal, GoalId, Money, Period};

use super::methodology::MethodologySection;
use super::summary::{BudgetSummary, RowKind, SummaryRow};

/// Read-only lookup of display names and icons
#[derive(Debug, Default)]
pub struct NameIndex {
    goal_names: HashMap<GoalId, String>,
    asset_names: HashMap<AssetId, String>,
    icons: HashMap<(String, String), String>,
}

impl NameIndex {
    /// Build the index from the snapshot's goal, asset, and mapping records
    pub fn build(goals: &[Goal], assets: &[Asset], mappings: &[CategoryMapping]) -> Self {
        let mut index = Self::default();
        for goal in goals {
            index.goal_names.insert(goal.id, goal.name.clone());
        }
        for asset in assets {
            index.asset_names.insert(asset.id, asset.name.clone());
        }
        for mapping in mappings {
            if !mapping.icon.is_empty() {
                index.icons.insert(
                    (mapping.parent_name.clone(), mapping.child_name.clone()),
                    mapping.icon.clone(),
                );
            }
        }
        index
    }
}

/// A summary row with display fields resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRow {
    pub kind: RowKind,
    /// Resolved display name; empty when the referenced record is gone
    pub name: String,
    pub parent_category: String,
    pub icon: String,
    pub budgeted: Money,
    pub spent: Money,
    pub expected: Money,
    pub contributed: Money,
}

/// Engine output with names and icons resolved for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSummary {
    pub period: Period,
    pub income: Money,
    pub budgeted: Money,
    pub spent: Money,
    pub carryover: Money,
    pub to_be_budgeted: Money,
    pub rows: Vec<AnnotatedRow>,
    pub sections: Vec<MethodologySection>,
}

/// Produce an annotated copy of a summary
pub fn annotate(summary: &BudgetSummary, index: &NameIndex) -> AnnotatedSummary {
    AnnotatedSummary {
        period: summary.period.clone(),
        income: summary.income,
        budgeted: summary.budgeted,
        spent: summary.spent,
        carryover: summary.carryover,
        to_be_budgeted: summary.to_be_budgeted,
        rows: summary.rows.iter().map(|row| annotate_row(row, index)).collect(),
        sections: summary.sections.clone(),
    }
}

fn annotate_row(row: &SummaryRow, index: &NameIndex) -> AnnotatedRow {
    let name = match row.kind {
        RowKind::Subcategory => row.name.clone(),
        RowKind::Goal => row
            .goal_id
            .and_then(|id| index.goal_names.get(&id).cloned())
            .unwrap_or_default(),
        RowKind::Asset => row
            .asset_id
            .and_then(|id| index.asset_names.get(&id).cloned())
            .unwrap_or_default(),
    };

    let icon = match row.kind {
        RowKind::Subcategory => index
            .icons
            .get(&(row.parent_category.clone(), row.name.clone()))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    };

    AnnotatedRow {
        kind: row.kind,
        name,
        parent_category: row.parent_category.clone(),
        icon,
        budgeted: row.budgeted,
        spent: row.spent,
        expected: row.expected,
        contributed: row.contributed,
    }
}
