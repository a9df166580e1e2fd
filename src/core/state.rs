//! Planning state - the single owner of stores, SKUs, weeks and the ledger.
//!
//! Every mutation the presentation layer performs goes through [`PlanningState`], so
//! the cross-collection rules live in one place:
//! - removing a store or SKU removes its planning cells
//! - a cell can only be entered for an existing store, SKU and week
//! - ids passed in are trimmed, matching how records are stored
//!
//! The state is an ordinary value. Build one per application (or per test) and pass
//! it where it is needed.

use crate::{
    core::{
        calendar,
        derive::{self, DerivedMetrics, WeekAggregate},
        dimension::DimensionList,
        ledger::PlanningLedger,
    },
    entities::{NewSku, NewStore, Sku, Store, Week},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// In-memory planning data for one session.
#[derive(Debug, Clone)]
pub struct PlanningState {
    stores: DimensionList<Store>,
    skus: DimensionList<Sku>,
    weeks: Vec<Week>,
    ledger: PlanningLedger,
}

impl Default for PlanningState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningState {
    /// Creates an empty state with the 52-week calendar generated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stores: DimensionList::new(),
            skus: DimensionList::new(),
            weeks: calendar::generate_weeks(),
            ledger: PlanningLedger::new(),
        }
    }

    /// Stores in display order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        self.stores.all()
    }

    /// SKUs in display order.
    #[must_use]
    pub fn skus(&self) -> &[Sku] {
        self.skus.all()
    }

    /// The planning calendar.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Read access to the raw sales-unit ledger.
    #[must_use]
    pub const fn ledger(&self) -> &PlanningLedger {
        &self.ledger
    }

    /// Looks up a store by id.
    #[must_use]
    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.get(id)
    }

    /// Looks up a SKU by id.
    #[must_use]
    pub fn sku(&self, id: &str) -> Option<&Sku> {
        self.skus.get(id)
    }

    // --- Stores ---

    /// Adds a store at the end of the display order.
    ///
    /// # Errors
    /// Returns an error if a field is blank or the id already exists.
    pub fn add_store(&mut self, store: NewStore) -> Result<Store> {
        let added = self.stores.add(store)?;
        info!(id = %added.id, seq_no = added.seq_no, "Store added");
        Ok(added)
    }

    /// Updates a store's fields, keeping its position. `Ok(None)` for an unknown id.
    ///
    /// # Errors
    /// Returns an error if a field is blank.
    pub fn update_store(&mut self, store: NewStore) -> Result<Option<Store>> {
        self.stores.update(store)
    }

    /// Removes a store and every planning cell that references it.
    /// Returns the removed store, or `None` for an unknown id.
    pub fn remove_store(&mut self, id: &str) -> Option<Store> {
        let removed = self.stores.remove(id)?;
        let cells = self.ledger.remove_by_store(&removed.id);
        info!(id = %removed.id, cells_removed = cells, "Store removed");
        Some(removed)
    }

    /// Moves a store between 0-based display positions and renumbers.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] for positions outside the store list.
    pub fn reorder_stores(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        self.stores.reorder(from_index, to_index)
    }

    // --- SKUs ---

    /// Adds a SKU at the end of the display order.
    ///
    /// # Errors
    /// Returns an error if a field is blank, price/cost is negative, or the id already exists.
    pub fn add_sku(&mut self, sku: NewSku) -> Result<Sku> {
        let added = self.skus.add(sku)?;
        info!(id = %added.id, seq_no = added.seq_no, "SKU added");
        Ok(added)
    }

    /// Updates a SKU's fields, keeping its position. `Ok(None)` for an unknown id.
    ///
    /// New price and cost apply to every derived value from the next read on.
    ///
    /// # Errors
    /// Returns an error if a field is blank or price/cost is negative.
    pub fn update_sku(&mut self, sku: NewSku) -> Result<Option<Sku>> {
        self.skus.update(sku)
    }

    /// Removes a SKU and every planning cell that references it.
    /// Returns the removed SKU, or `None` for an unknown id.
    pub fn remove_sku(&mut self, id: &str) -> Option<Sku> {
        let removed = self.skus.remove(id)?;
        let cells = self.ledger.remove_by_sku(&removed.id);
        info!(id = %removed.id, cells_removed = cells, "SKU removed");
        Some(removed)
    }

    /// Moves a SKU between 0-based display positions and renumbers.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] for positions outside the SKU list.
    pub fn reorder_skus(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        self.skus.reorder(from_index, to_index)
    }

    // --- Planning cells ---

    /// Upserts the sales units for an existing store, SKU and week.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The store, SKU or week does not exist
    /// - `sales_units` is negative, not finite, or too large
    pub fn set_cell(
        &mut self,
        store_id: &str,
        sku_id: &str,
        week_id: &str,
        sales_units: f64,
    ) -> Result<()> {
        let (store_id, sku_id, week_id) = (store_id.trim(), sku_id.trim(), week_id.trim());
        if !self.stores.contains(store_id) {
            return Err(not_found("store", store_id));
        }
        if !self.skus.contains(sku_id) {
            return Err(not_found("sku", sku_id));
        }
        if !self.weeks.iter().any(|w| w.id == week_id) {
            return Err(not_found("week", week_id));
        }

        self.ledger.set_cell(store_id, sku_id, week_id, sales_units)?;
        debug!(store_id, sku_id, week_id, sales_units, "Planning cell set");
        Ok(())
    }

    /// Sales units for a combination, zero when nothing was entered.
    #[must_use]
    pub fn get_cell(&self, store_id: &str, sku_id: &str, week_id: &str) -> f64 {
        self.ledger
            .get_cell(store_id.trim(), sku_id.trim(), week_id.trim())
    }

    /// Derived metrics for a cell, `None` if the SKU does not exist.
    #[must_use]
    pub fn derive(&self, store_id: &str, sku_id: &str, week_id: &str) -> Option<DerivedMetrics> {
        derive::derive(
            &self.skus,
            &self.ledger,
            store_id.trim(),
            sku_id.trim(),
            week_id.trim(),
        )
    }

    /// Weekly store totals across all SKUs, one entry for each of the 52 weeks.
    #[must_use]
    pub fn aggregate_by_week(&self, store_id: &str) -> Vec<WeekAggregate> {
        derive::aggregate_by_week(&self.skus, &self.ledger, &self.weeks, store_id.trim())
    }
}

fn not_found(kind: &'static str, id: &str) -> Error {
    Error::NotFound {
        kind,
        id: id.to_string(),
    }
}
