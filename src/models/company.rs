// file: src/models/company.rs
// description: flat company record emitted per search match
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One matched company as returned by the search endpoint. The sequence
/// of these is the only state the run accumulates; its sole destiny is
/// serialization to the output CSV. Duplicates are kept and order
/// mirrors input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub record_id: String,
}

impl CompanyRecord {
    pub fn new(name: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_id: record_id.into(),
        }
    }
}
