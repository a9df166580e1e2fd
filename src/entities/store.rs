//! Store entity - a retail location in the planning dimension.

use super::{Dimension, require_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// A retail location, ordered for display by `seq_no`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Unique, user-assigned identifier (e.g. "ST035")
    pub id: String,
    /// 1-based display and report order
    pub seq_no: u32,
    /// Display name
    pub label: String,
    /// City the store is located in
    pub city: String,
    /// State or region code
    pub state: String,
}

/// A store as submitted by the store form, before a sequence number is assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStore {
    /// Unique, user-assigned identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// City the store is located in
    pub city: String,
    /// State or region code
    pub state: String,
}

impl NewStore {
    /// Convenience constructor used by seeding and tests.
    #[must_use]
    pub fn new(id: &str, label: &str, city: &str, state: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }
}

impl Dimension for Store {
    type Draft = NewStore;

    const KIND: &'static str = "store";

    fn id(&self) -> &str {
        &self.id
    }

    fn seq_no(&self) -> u32 {
        self.seq_no
    }

    fn set_seq_no(&mut self, seq_no: u32) {
        self.seq_no = seq_no;
    }

    fn validate_draft(draft: &NewStore) -> Result<()> {
        require_text(&draft.id, "Store id cannot be empty")?;
        require_text(&draft.label, "Store label cannot be empty")?;
        require_text(&draft.city, "Store city cannot be empty")?;
        require_text(&draft.state, "Store state cannot be empty")
    }

    fn from_draft(draft: NewStore, seq_no: u32) -> Self {
        Self {
            id: draft.id.trim().to_string(),
            seq_no,
            label: draft.label.trim().to_string(),
            city: draft.city.trim().to_string(),
            state: draft.state.trim().to_string(),
        }
    }
}
