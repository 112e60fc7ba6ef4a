//! Terminal rendering of budget summaries
//!
//! Formats an annotated summary for the `summarize` command: a totals
//! block, a row table, and the methodology sections. Subcategories the
//! user has hidden through their methodology customization are skipped
//! here; the engine still computes them.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::engine::{AnnotatedSummary, RowKind};

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Group")]
    parent: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Contributed")]
    contributed: String,
}

/// Format a full summary for terminal output
pub fn format_summary(
    summary: &AnnotatedSummary,
    currency_symbol: &str,
    hidden_subcategories: &[String],
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", summary.period.label));
    output.push_str(&format!(
        "Income: {}   Budgeted: {}   Spent: {}   Carryover: {}\n",
        summary.income.display_with(currency_symbol),
        summary.budgeted.display_with(currency_symbol),
        summary.spent.display_with(currency_symbol),
        summary.carryover.display_with(currency_symbol),
    ));
    output.push_str(&format!(
        "To be budgeted: {}\n\n",
        summary.to_be_budgeted.display_with(currency_symbol)
    ));

    let rows: Vec<DisplayRow> = summary
        .rows
        .iter()
        .filter(|row| {
            row.kind != RowKind::Subcategory || !hidden_subcategories.contains(&row.name)
        })
        .map(|row| {
            let name = match row.kind {
                RowKind::Subcategory if row.icon.is_empty() => row.name.clone(),
                RowKind::Subcategory => format!("{} {}", row.icon, row.name),
                RowKind::Goal => format!("Goal: {}", display_name(&row.name)),
                RowKind::Asset => format!("Asset: {}", display_name(&row.name)),
            };
            DisplayRow {
                name,
                parent: row.parent_category.clone(),
                budgeted: row.budgeted.display_with(currency_symbol),
                spent: row.spent.display_with(currency_symbol),
                expected: row.expected.display_with(currency_symbol),
                contributed: row.contributed.display_with(currency_symbol),
            }
        })
        .collect();

    if rows.is_empty() {
        output.push_str("No activity this period.\n");
    } else {
        let table = Table::new(rows).with(Style::sharp()).to_string();
        output.push_str(&table);
        output.push('\n');
    }

    if !summary.sections.is_empty() {
        output.push('\n');
        output.push_str("Methodology sections:\n");
        for section in &summary.sections {
            match section.percentage {
                Some(pct) => {
                    output.push_str(&format!("  {} ({:.0}%)\n", section.name, pct));
                }
                None => {
                    output.push_str(&format!("  {}\n", section.name));
                }
            }
        }
    }

    output
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(deleted)"
    } else {
        name
    }
}
