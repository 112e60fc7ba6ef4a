//! Budgeting methodology presets and customization
//!
//! A methodology is a named preset grouping of the modern category
//! vocabulary, optionally with target percentages. A partnership (or one
//! user within it) can customize a preset: rename a grouping, regroup its
//! underlying categories, change its percentage or color, reorder it, or
//! hide it. Customizations are validated before they are ever persisted,
//! so the merge step never has to handle an invalid one.
//!
//! Groupings only affect how summary rows are sectioned and labelled for
//! display; they never filter which categories receive spend or assignment
//! data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{BudgetError, BudgetResult};

/// Tolerance for percentage sums on percentage-based methodologies
const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// The fixed vocabulary of modern parent categories
///
/// Every `underlying_categories` entry in a preset or customization must
/// name one of these.
pub const MODERN_CATEGORIES: [&str; 21] = [
    "Housing",
    "Utilities",
    "Groceries",
    "Transport",
    "Health",
    "Insurance",
    "Dining Out",
    "Entertainment",
    "Shopping",
    "Personal Care",
    "Subscriptions",
    "Education",
    "Kids",
    "Pets",
    "Travel",
    "Gifts",
    "Debt Payments",
    "Savings",
    "Investments",
    "Fees",
    "Other",
];

/// The named methodology presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MethodologyKind {
    ZeroBased,
    #[serde(rename = "50-30-20")]
    FiftyThirtyTwenty,
    Envelope,
    PayYourselfFirst,
    #[serde(rename = "80-20")]
    EightyTwenty,
}

impl MethodologyKind {
    /// All kinds, for listing
    pub fn all() -> &'static [Self] {
        &[
            Self::ZeroBased,
            Self::FiftyThirtyTwenty,
            Self::Envelope,
            Self::PayYourselfFirst,
            Self::EightyTwenty,
        ]
    }

    /// Whether this methodology validates percentage sums
    pub fn is_percentage_based(&self) -> bool {
        matches!(
            self,
            Self::FiftyThirtyTwenty | Self::PayYourselfFirst | Self::EightyTwenty
        )
    }
}

impl fmt::Display for MethodologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ZeroBased => "zero-based",
            Self::FiftyThirtyTwenty => "50-30-20",
            Self::Envelope => "envelope",
            Self::PayYourselfFirst => "pay-yourself-first",
            Self::EightyTwenty => "80-20",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MethodologyKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero-based" => Ok(Self::ZeroBased),
            "50-30-20" => Ok(Self::FiftyThirtyTwenty),
            "envelope" => Ok(Self::Envelope),
            "pay-yourself-first" => Ok(Self::PayYourselfFirst),
            "80-20" => Ok(Self::EightyTwenty),
            other => Err(BudgetError::unknown_methodology(other)),
        }
    }
}

/// One grouping in the operative methodology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodologySection {
    pub name: String,
    #[serde(default)]
    pub percentage: Option<f64>,
    pub underlying_categories: Vec<String>,
    pub color: String,
    pub display_order: i32,
}

/// One customized grouping, matched to a preset entry by `original_name`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomCategory {
    pub original_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub underlying_categories: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub is_hidden: bool,
}

/// A partnership's (or user's) methodology overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodologyCustomization {
    #[serde(default)]
    pub custom_categories: Vec<CustomCategory>,
    #[serde(default)]
    pub hidden_subcategories: Vec<String>,
}

fn section(
    name: &str,
    percentage: Option<f64>,
    underlying: &[&str],
    color: &str,
    display_order: i32,
) -> MethodologySection {
    MethodologySection {
        name: name.to_string(),
        percentage,
        underlying_categories: underlying.iter().map(|s| s.to_string()).collect(),
        color: color.to_string(),
        display_order,
    }
}

/// The untouched preset groupings for a methodology
pub fn preset_sections(kind: MethodologyKind) -> Vec<MethodologySection> {
    match kind {
        MethodologyKind::ZeroBased => vec![
            section(
                "Bills",
                None,
                &["Housing", "Utilities", "Insurance", "Subscriptions", "Debt Payments"],
                "#E07A5F",
                1,
            ),
            section(
                "Everyday",
                None,
                &["Groceries", "Transport", "Health", "Personal Care", "Kids", "Pets"],
                "#3D405B",
                2,
            ),
            section(
                "Lifestyle",
                None,
                &["Dining Out", "Entertainment", "Shopping", "Travel", "Gifts"],
                "#81B29A",
                3,
            ),
            section(
                "Future",
                None,
                &["Savings", "Investments", "Education"],
                "#F2CC8F",
                4,
            ),
        ],
        MethodologyKind::FiftyThirtyTwenty => vec![
            section(
                "Needs",
                Some(50.0),
                &["Housing", "Utilities", "Groceries", "Transport", "Health", "Insurance"],
                "#E07A5F",
                1,
            ),
            section(
                "Wants",
                Some(30.0),
                &["Dining Out", "Entertainment", "Shopping", "Travel", "Subscriptions"],
                "#81B29A",
                2,
            ),
            section(
                "Savings",
                Some(20.0),
                &["Savings", "Investments", "Debt Payments"],
                "#F2CC8F",
                3,
            ),
        ],
        MethodologyKind::Envelope => vec![
            section("Housing", None, &["Housing", "Utilities"], "#E07A5F", 1),
            section("Food", None, &["Groceries", "Dining Out"], "#3D405B", 2),
            section("Getting Around", None, &["Transport"], "#81B29A", 3),
            section(
                "Fun Money",
                None,
                &["Entertainment", "Shopping", "Travel", "Gifts"],
                "#F2CC8F",
                4,
            ),
            section("Rainy Day", None, &["Savings", "Investments"], "#6A8EAE", 5),
        ],
        MethodologyKind::PayYourselfFirst => vec![
            section(
                "Pay Yourself",
                Some(20.0),
                &["Savings", "Investments"],
                "#F2CC8F",
                1,
            ),
            section(
                "Essentials",
                Some(50.0),
                &["Housing", "Utilities", "Groceries", "Transport", "Health", "Insurance"],
                "#E07A5F",
                2,
            ),
            section(
                "Everything Else",
                Some(30.0),
                &["Dining Out", "Entertainment", "Shopping", "Subscriptions", "Travel"],
                "#81B29A",
                3,
            ),
        ],
        MethodologyKind::EightyTwenty => vec![
            section(
                "Living",
                Some(80.0),
                &[
                    "Housing",
                    "Utilities",
                    "Groceries",
                    "Transport",
                    "Health",
                    "Insurance",
                    "Dining Out",
                    "Entertainment",
                    "Shopping",
                ],
                "#3D405B",
                1,
            ),
            section(
                "Savings",
                Some(20.0),
                &["Savings", "Investments", "Debt Payments"],
                "#F2CC8F",
                2,
            ),
        ],
    }
}

struct MergedEntry {
    section: MethodologySection,
    hidden: bool,
}

/// Lay a customization over the preset, keeping hidden flags
fn merge(kind: MethodologyKind, customization: Option<&MethodologyCustomization>) -> Vec<MergedEntry> {
    preset_sections(kind)
        .into_iter()
        .map(|preset| {
            let custom = customization.and_then(|c| {
                c.custom_categories
                    .iter()
                    .find(|custom| custom.original_name == preset.name)
            });

            match custom {
                Some(custom) => MergedEntry {
                    section: MethodologySection {
                        name: custom.name.clone().unwrap_or(preset.name),
                        percentage: custom.percentage.or(preset.percentage),
                        underlying_categories: custom
                            .underlying_categories
                            .clone()
                            .unwrap_or(preset.underlying_categories),
                        color: custom.color.clone().unwrap_or(preset.color),
                        display_order: custom.display_order.unwrap_or(preset.display_order),
                    },
                    hidden: custom.is_hidden,
                },
                None => MergedEntry {
                    section: preset,
                    hidden: false,
                },
            }
        })
        .collect()
}

/// The operative groupings: preset merged with customization, sorted by
/// display order, hidden entries dropped
pub fn resolve_sections(
    kind: MethodologyKind,
    customization: Option<&MethodologyCustomization>,
) -> Vec<MethodologySection> {
    let mut entries = merge(kind, customization);
    entries.sort_by_key(|entry| entry.section.display_order);
    entries
        .into_iter()
        .filter(|entry| !entry.hidden)
        .map(|entry| entry.section)
        .collect()
}

/// Validate a customization before it is persisted
///
/// Rejections here are the only hard failures in methodology handling; a
/// customization that passes can always be merged.
pub fn validate_customization(
    kind: MethodologyKind,
    customization: &MethodologyCustomization,
) -> BudgetResult<()> {
    let preset_names: HashSet<String> =
        preset_sections(kind).into_iter().map(|s| s.name).collect();

    for custom in &customization.custom_categories {
        if !preset_names.contains(&custom.original_name) {
            return Err(BudgetError::Validation(format!(
                "No grouping named '{}' in the {} methodology",
                custom.original_name, kind
            )));
        }

        if let Some(categories) = &custom.underlying_categories {
            for category in categories {
                if !MODERN_CATEGORIES.contains(&category.as_str()) {
                    return Err(BudgetError::Validation(format!(
                        "Unknown category '{}' in grouping '{}'",
                        category, custom.original_name
                    )));
                }
            }
        }
    }

    let merged = merge(kind, Some(customization));

    let mut seen = HashSet::new();
    for entry in merged.iter().filter(|e| !e.hidden) {
        if !seen.insert(entry.section.name.clone()) {
            return Err(BudgetError::Validation(format!(
                "Duplicate grouping name '{}'",
                entry.section.name
            )));
        }
    }

    if kind.is_percentage_based() {
        let total: f64 = merged
            .iter()
            .filter(|e| !e.hidden)
            .filter_map(|e| e.section.percentage)
            .sum();
        if (total - 100.0).abs() > PERCENTAGE_TOLERANCE {
            return Err(BudgetError::Validation(format!(
                "Percentages for {} must sum to 100, got {:.2}",
                kind, total
            )));
        }
    }

    Ok(())
}
