//! Planning cell entity - the user-entered sales-unit forecast for one
//! store, SKU and week. Derived dollar figures are never stored here.

use serde::{Deserialize, Serialize};

/// Sales-unit forecast keyed by `(store_id, sku_id, week_id)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanningCell {
    /// References `Store::id`
    pub store_id: String,
    /// References `Sku::id`
    pub sku_id: String,
    /// References `Week::id`
    pub week_id: String,
    /// Forecast units, never negative
    pub sales_units: f64,
}
