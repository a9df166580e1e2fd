//! Derivation engine - financial metrics computed from sales units on every read.
//!
//! Nothing here is cached. A change to a SKU's price or cost is reflected by the next
//! call without touching the ledger. Derivation looks up the SKU only, never the
//! store, so cells of a store that was just created still derive normally.

use crate::{
    core::{dimension::DimensionList, ledger::PlanningLedger},
    entities::{Sku, Week},
};
use serde::Serialize;

/// Sales and gross-margin figures for one planning cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// `sales_units * price`
    pub sales_dollars: f64,
    /// `sales_dollars - sales_units * cost`
    pub gm_dollars: f64,
    /// `gm_dollars / sales_dollars * 100`, or 0 when there are no sales
    pub gm_percentage: f64,
}

/// Store-level totals for one week, summed across every SKU.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekAggregate {
    /// Week id ("W01".."W52")
    pub week_id: String,
    /// Summed sales dollars
    pub sales_dollars: f64,
    /// Summed gross-margin dollars
    pub gm_dollars: f64,
    /// Margin percentage of the summed figures
    pub gm_percentage: f64,
}

/// Gross-margin percentage of a sales figure; zero when there are no sales.
#[must_use]
pub fn gm_percentage(sales_dollars: f64, gm_dollars: f64) -> f64 {
    if sales_dollars > 0.0 {
        gm_dollars / sales_dollars * 100.0
    } else {
        0.0
    }
}

/// Computes the derived metrics for a number of units of one SKU.
#[must_use]
pub fn derive_metrics(sales_units: f64, sku: &Sku) -> DerivedMetrics {
    let sales_dollars = sales_units * sku.price;
    let gm_dollars = sales_dollars - sales_units * sku.cost;
    DerivedMetrics {
        sales_dollars,
        gm_dollars,
        gm_percentage: gm_percentage(sales_dollars, gm_dollars),
    }
}

/// Derived metrics for a single cell. Missing cells count as zero units.
///
/// Returns `None` only when the SKU does not exist.
#[must_use]
pub fn derive(
    skus: &DimensionList<Sku>,
    ledger: &PlanningLedger,
    store_id: &str,
    sku_id: &str,
    week_id: &str,
) -> Option<DerivedMetrics> {
    let sku = skus.get(sku_id)?;
    Some(derive_metrics(ledger.get_cell(store_id, sku_id, week_id), sku))
}

/// Weekly totals for a store across all SKUs, one entry per calendar week.
///
/// Dollars are summed first and the percentage is computed from the sums, which
/// weights each SKU by its sales rather than averaging per-SKU percentages.
#[must_use]
pub fn aggregate_by_week(
    skus: &DimensionList<Sku>,
    ledger: &PlanningLedger,
    weeks: &[Week],
    store_id: &str,
) -> Vec<WeekAggregate> {
    weeks
        .iter()
        .map(|week| {
            let (sales_dollars, gm_dollars) =
                skus.all().iter().fold((0.0, 0.0), |(sales, gm), sku| {
                    let metrics =
                        derive_metrics(ledger.get_cell(store_id, &sku.id, &week.id), sku);
                    (sales + metrics.sales_dollars, gm + metrics.gm_dollars)
                });
            WeekAggregate {
                week_id: week.id.clone(),
                sales_dollars,
                gm_dollars,
                gm_percentage: gm_percentage(sales_dollars, gm_dollars),
            }
        })
        .collect()
}
