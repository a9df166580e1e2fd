//! Planning grid read model.
//!
//! The grid shows one row per (store, SKU) pair and four columns per week. Column
//! fields are named `<week id>_<measure>`, e.g. `W07_salesUnits`. Only the sales-units
//! column is editable; the other three are derived on read.

use crate::{
    core::{derive::DerivedMetrics, state::PlanningState},
    errors::{Error, Result},
};
use serde::Serialize;
use std::fmt;

/// The four per-week grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMeasure {
    /// User-entered forecast, the only editable column
    SalesUnits,
    /// Derived sales dollars
    SalesDollars,
    /// Derived gross-margin dollars
    GmDollars,
    /// Derived gross-margin percentage
    GmPercentage,
}

impl GridMeasure {
    const ALL: [Self; 4] = [
        Self::SalesUnits,
        Self::SalesDollars,
        Self::GmDollars,
        Self::GmPercentage,
    ];

    /// Suffix used in column field names.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::SalesUnits => "salesUnits",
            Self::SalesDollars => "salesDollars",
            Self::GmDollars => "gmDollars",
            Self::GmPercentage => "gmPercentage",
        }
    }

    /// Column header text.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::SalesUnits => "Sales Units",
            Self::SalesDollars => "Sales Dollars",
            Self::GmDollars => "GM Dollars",
            Self::GmPercentage => "GM %",
        }
    }
}

impl fmt::Display for GridMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Builds the column field name for a week and measure.
#[must_use]
pub fn column_field(week_id: &str, measure: GridMeasure) -> String {
    format!("{week_id}_{measure}")
}

/// Splits a column field such as `W12_gmDollars` into its week id and measure.
///
/// # Errors
/// Returns [`Error::Validation`] if the field does not follow the `W<digits>_<measure>` shape.
pub fn parse_column_field(field: &str) -> Result<(String, GridMeasure)> {
    let invalid = || Error::Validation {
        message: format!("Unrecognized grid column: {field}"),
    };

    let (week_id, suffix) = field.split_once('_').ok_or_else(invalid)?;
    let digits = week_id.strip_prefix('W').ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let measure = GridMeasure::ALL
        .into_iter()
        .find(|m| m.suffix() == suffix)
        .ok_or_else(invalid)?;

    Ok((week_id.to_string(), measure))
}

/// One week of one grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    /// Week id
    pub week_id: String,
    /// Entered units, 0 when nothing was entered
    pub sales_units: f64,
    /// Derived metrics, `None` if the SKU vanished between reads
    pub metrics: Option<DerivedMetrics>,
}

/// One (store, SKU) row of the planning grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    /// Store id
    pub store_id: String,
    /// Store display name
    pub store_label: String,
    /// SKU id
    pub sku_id: String,
    /// SKU display name
    pub sku_label: String,
    /// SKU unit price
    pub sku_price: f64,
    /// SKU unit cost
    pub sku_cost: f64,
    /// One entry per calendar week, in calendar order
    pub weeks: Vec<GridCell>,
}

impl GridRow {
    /// Value of a column for this row, as the grid would display it.
    #[must_use]
    pub fn value(&self, week_id: &str, measure: GridMeasure) -> Option<f64> {
        let cell = self.weeks.iter().find(|c| c.week_id == week_id)?;
        match measure {
            GridMeasure::SalesUnits => Some(cell.sales_units),
            GridMeasure::SalesDollars => cell.metrics.map(|m| m.sales_dollars),
            GridMeasure::GmDollars => cell.metrics.map(|m| m.gm_dollars),
            GridMeasure::GmPercentage => cell.metrics.map(|m| m.gm_percentage),
        }
    }
}

/// Builds every grid row, stores in display order and SKUs in display order within each.
#[must_use]
pub fn grid_rows(state: &PlanningState) -> Vec<GridRow> {
    let mut rows = Vec::with_capacity(state.stores().len() * state.skus().len());
    for store in state.stores() {
        for sku in state.skus() {
            let weeks = state
                .weeks()
                .iter()
                .map(|week| GridCell {
                    week_id: week.id.clone(),
                    sales_units: state.get_cell(&store.id, &sku.id, &week.id),
                    metrics: state.derive(&store.id, &sku.id, &week.id),
                })
                .collect();

            rows.push(GridRow {
                store_id: store.id.clone(),
                store_label: store.label.clone(),
                sku_id: sku.id.clone(),
                sku_label: sku.label.clone(),
                sku_price: sku.price,
                sku_cost: sku.cost,
                weeks,
            });
        }
    }
    rows
}

/// Applies an edit made in the grid to the row's own store and SKU.
///
/// A cleared cell (`None`) is stored as zero units.
///
/// # Errors
/// Returns an error if:
/// - The field is not a sales-units column
/// - The store, SKU or week does not exist
/// - The value is negative, not finite, or too large
pub fn apply_grid_edit(
    state: &mut PlanningState,
    store_id: &str,
    sku_id: &str,
    field: &str,
    new_value: Option<f64>,
) -> Result<()> {
    let (week_id, measure) = parse_column_field(field)?;
    if measure != GridMeasure::SalesUnits {
        return Err(Error::Validation {
            message: format!("Column {field} is derived and cannot be edited"),
        });
    }
    state.set_cell(store_id, sku_id, &week_id, new_value.unwrap_or(0.0))
}
