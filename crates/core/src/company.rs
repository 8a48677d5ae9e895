//! Company records.

use faktura_shared::types::CompanyId;
use serde::{Deserialize, Serialize};

/// A company appearing on invoices, either the operating entity or a
/// counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Full legal name.
    pub name: String,
    /// Short code used in generated order names (e.g., "ACME").
    pub shortcut: String,
    /// True for the operating entity whose books these are.
    pub is_mine: bool,
}

impl Company {
    /// Creates a company record.
    #[must_use]
    pub fn new(name: impl Into<String>, shortcut: impl Into<String>, is_mine: bool) -> Self {
        Self {
            id: CompanyId::new(),
            name: name.into(),
            shortcut: shortcut.into(),
            is_mine,
        }
    }
}
