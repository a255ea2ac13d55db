//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// The synthetic "all" sentinel used by the menu filter is not a
/// `Category`; it exists only in [`crate::filter`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
