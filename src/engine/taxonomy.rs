//! Category taxonomy resolution
//!
//! Builds the two-level parent/child category name space from the mapping
//! table and classifies transactions and recurring-expense definitions into
//! it. Transactions classify by direct lookup; definitions have no stored
//! category and are classified by majority vote over the categories of
//! their matched transactions.

use std::collections::HashMap;

use crate::models::{CategoryMapping, ExpenseDefinition, RawCategoryId, Transaction, TransactionId};

/// A resolved parent/child pair
///
/// Both names are empty for unmapped ids; the aggregator buckets those
/// under "Uncategorized".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedCategory {
    pub parent_name: String,
    pub child_name: String,
}

impl ResolvedCategory {
    /// Whether the lookup found no mapping
    pub fn is_unmapped(&self) -> bool {
        self.parent_name.is_empty() && self.child_name.is_empty()
    }
}

/// Lookup tables built once per engine invocation
#[derive(Debug)]
pub struct CategoryTaxonomy {
    by_raw_id: HashMap<RawCategoryId, (String, String)>,
    icons: HashMap<(String, String), String>,
}

impl CategoryTaxonomy {
    /// Build lookup tables from the mapping table
    ///
    /// Later rows win on duplicate raw ids, matching the store's
    /// last-write-wins behavior for re-mapped ids.
    pub fn from_mappings(mappings: &[CategoryMapping]) -> Self {
        let mut by_raw_id = HashMap::with_capacity(mappings.len());
        let mut icons = HashMap::new();

        for mapping in mappings {
            by_raw_id.insert(
                mapping.raw_category_id.clone(),
                (mapping.parent_name.clone(), mapping.child_name.clone()),
            );
            if !mapping.icon.is_empty() {
                icons.insert(
                    (mapping.parent_name.clone(), mapping.child_name.clone()),
                    mapping.icon.clone(),
                );
            }
        }

        Self { by_raw_id, icons }
    }

    /// Classify a provider category id
    pub fn classify_raw(&self, raw_id: &RawCategoryId) -> ResolvedCategory {
        match self.by_raw_id.get(raw_id) {
            Some((parent, child)) => ResolvedCategory {
                parent_name: parent.clone(),
                child_name: child.clone(),
            },
            None => ResolvedCategory::default(),
        }
    }

    /// Classify a transaction by direct lookup
    pub fn classify_transaction(&self, transaction: &Transaction) -> ResolvedCategory {
        self.classify_raw(&transaction.raw_category_id)
    }

    /// Infer a recurring expense's category by majority vote
    ///
    /// Counts the raw category id of each matched transaction in list
    /// order; the highest count wins, ties break toward the id seen first.
    /// A definition with no matched transactions resolves unmapped.
    pub fn infer_expense_category(
        &self,
        definition: &ExpenseDefinition,
        transactions_by_id: &HashMap<TransactionId, &Transaction>,
    ) -> ResolvedCategory {
        let matched_raw_ids = definition
            .matched_transaction_ids
            .iter()
            .filter_map(|id| transactions_by_id.get(id))
            .map(|txn| &txn.raw_category_id);

        match majority_raw_category(matched_raw_ids) {
            Some(raw_id) => self.classify_raw(raw_id),
            None => ResolvedCategory::default(),
        }
    }

    /// Icon registered for a parent/child pair, if any
    pub fn icon_for(&self, parent_name: &str, child_name: &str) -> Option<&str> {
        self.icons
            .get(&(parent_name.to_string(), child_name.to_string()))
            .map(String::as_str)
    }
}

/// Pick the most frequent raw category id, ties broken by first encounter
fn majority_raw_category<'a>(
    ids: impl Iterator<Item = &'a RawCategoryId>,
) -> Option<&'a RawCategoryId> {
    let mut counts: HashMap<&RawCategoryId, (usize, usize)> = HashMap::new();

    for (position, id) in ids.enumerate() {
        let entry = counts.entry(id).or_insert((0, position));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .min_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        })
        .map(|(id, _)| id)
}
