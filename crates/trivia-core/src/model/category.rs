use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A question category
///
/// The label is serialized as `type` to match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    /// Single-entry `{id: label}` map used for `current_category`
    pub fn as_map(&self) -> BTreeMap<i64, String> {
        BTreeMap::from([(self.id, self.kind.clone())])
    }
}

/// Build the `{id: label}` map sent with question listings
pub fn categories_by_id(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
