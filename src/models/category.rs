//! Category mapping records
//!
//! The two-level (parent/child) category name space is maintained by an
//! administrator as a table of mappings from provider category ids. The
//! table is immutable within one engine invocation.

use serde::{Deserialize, Serialize};

use super::ids::RawCategoryId;

/// Bucket label for transactions whose category id has no mapping
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One row of the provider-id to parent/child taxonomy table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMapping {
    pub raw_category_id: RawCategoryId,
    pub parent_name: String,
    pub child_name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub display_order: i32,
}

impl CategoryMapping {
    /// Create a mapping row
    pub fn new(
        raw_category_id: impl Into<RawCategoryId>,
        parent_name: impl Into<String>,
        child_name: impl Into<String>,
    ) -> Self {
        Self {
            raw_category_id: raw_category_id.into(),
            parent_name: parent_name.into(),
            child_name: child_name.into(),
            icon: String::new(),
            display_order: 0,
        }
    }

    /// Attach an icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}
