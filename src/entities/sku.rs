//! SKU entity - a sellable product with a unit price and unit cost.
//!
//! Price and cost drive every derived metric, so both must be finite and non-negative.

use super::{Dimension, require_amount, require_text};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// A sellable product, ordered for display by `seq_no`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    /// Unique identifier (e.g. "SKU001")
    pub id: String,
    /// 1-based display order
    pub seq_no: u32,
    /// Display name
    pub label: String,
    /// Selling price per unit in dollars
    pub price: f64,
    /// Cost per unit in dollars
    pub cost: f64,
}

/// A SKU as submitted by the SKU form, before a sequence number is assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSku {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// Selling price per unit in dollars
    pub price: f64,
    /// Cost per unit in dollars
    pub cost: f64,
}

impl NewSku {
    /// Convenience constructor used by seeding and tests.
    #[must_use]
    pub fn new(id: &str, label: &str, price: f64, cost: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            price,
            cost,
        }
    }
}

impl Dimension for Sku {
    type Draft = NewSku;

    const KIND: &'static str = "sku";

    fn id(&self) -> &str {
        &self.id
    }

    fn seq_no(&self) -> u32 {
        self.seq_no
    }

    fn set_seq_no(&mut self, seq_no: u32) {
        self.seq_no = seq_no;
    }

    fn validate_draft(draft: &NewSku) -> Result<()> {
        require_text(&draft.id, "SKU id cannot be empty")?;
        require_text(&draft.label, "SKU label cannot be empty")?;
        require_amount("price", draft.price)?;
        require_amount("cost", draft.cost)
    }

    fn from_draft(draft: NewSku, seq_no: u32) -> Self {
        Self {
            id: draft.id.trim().to_string(),
            seq_no,
            label: draft.label.trim().to_string(),
            price: draft.price,
            cost: draft.cost,
        }
    }
}
