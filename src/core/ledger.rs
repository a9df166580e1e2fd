//! Planning ledger - sparse sales-unit forecasts keyed by store, SKU and week.
//!
//! Only explicitly entered values are stored; every other combination reads as zero.
//! Cells are never removed one by one, only in bulk when their store or SKU goes away.

use crate::{
    entities::{PlanningCell, require_amount},
    errors::Result,
};
use std::collections::BTreeMap;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CellKey {
    store_id: String,
    sku_id: String,
    week_id: String,
}

impl CellKey {
    fn new(store_id: &str, sku_id: &str, week_id: &str) -> Self {
        Self {
            store_id: store_id.to_string(),
            sku_id: sku_id.to_string(),
            week_id: week_id.to_string(),
        }
    }
}

/// Sparse map of `(store_id, sku_id, week_id)` to sales units.
#[derive(Debug, Clone, Default)]
pub struct PlanningLedger {
    cells: BTreeMap<CellKey, f64>,
}

impl PlanningLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Upserts the sales units for a combination, overwriting any earlier value.
    /// Returns the previous value if the cell already existed.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidAmount`] if `sales_units` is negative, not
    /// finite, or above [`crate::entities::MAX_AMOUNT`].
    pub fn set_cell(
        &mut self,
        store_id: &str,
        sku_id: &str,
        week_id: &str,
        sales_units: f64,
    ) -> Result<Option<f64>> {
        require_amount("sales units", sales_units)?;

        let previous = self
            .cells
            .insert(CellKey::new(store_id, sku_id, week_id), sales_units);
        trace!(store_id, sku_id, week_id, sales_units, ?previous, "Set planning cell");
        Ok(previous)
    }

    /// Sales units for a combination, zero when nothing was entered.
    #[must_use]
    pub fn get_cell(&self, store_id: &str, sku_id: &str, week_id: &str) -> f64 {
        self.cells
            .get(&CellKey::new(store_id, sku_id, week_id))
            .copied()
            .unwrap_or(0.0)
    }

    /// Drops every cell that references the store. Returns how many were removed.
    pub fn remove_by_store(&mut self, store_id: &str) -> usize {
        self.remove_where(|key| key.store_id == store_id)
    }

    /// Drops every cell that references the SKU. Returns how many were removed.
    pub fn remove_by_sku(&mut self, sku_id: &str) -> usize {
        self.remove_where(|key| key.sku_id == sku_id)
    }

    fn remove_where(&mut self, predicate: impl Fn(&CellKey) -> bool) -> usize {
        let before = self.cells.len();
        self.cells.retain(|key, _| !predicate(key));
        let removed = before - self.cells.len();
        debug!(removed, remaining = self.cells.len(), "Removed planning cells");
        removed
    }

    /// All stored cells ordered by store id, SKU id, then week id.
    #[must_use]
    pub fn cells(&self) -> Vec<PlanningCell> {
        self.cells
            .iter()
            .map(|(key, &sales_units)| PlanningCell {
                store_id: key.store_id.clone(),
                sku_id: key.sku_id.clone(),
                week_id: key.week_id.clone(),
                sales_units,
            })
            .collect()
    }

    /// Number of stored cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when no cell has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{entities::MAX_AMOUNT, errors::Error};

    #[test]
    fn test_missing_cell_reads_zero() {
        let ledger = PlanningLedger::new();
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W01"), 0.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_set_cell_overwrites() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        assert_eq!(ledger.set_cell("ST035", "SKU001", "W01", 5.0)?, None);
        assert_eq!(ledger.set_cell("ST035", "SKU001", "W01", 8.0)?, Some(5.0));
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W01"), 8.0);
        assert_eq!(ledger.len(), 1);
        Ok(())
    }

    #[test]
    fn test_set_cell_keys_are_independent() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        ledger.set_cell("ST035", "SKU001", "W01", 1.0)?;
        ledger.set_cell("ST035", "SKU002", "W01", 2.0)?;
        ledger.set_cell("ST046", "SKU001", "W01", 3.0)?;
        ledger.set_cell("ST035", "SKU001", "W02", 4.0)?;

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W01"), 1.0);
        assert_eq!(ledger.get_cell("ST035", "SKU002", "W01"), 2.0);
        assert_eq!(ledger.get_cell("ST046", "SKU001", "W01"), 3.0);
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W02"), 4.0);
        Ok(())
    }

    #[test]
    fn test_set_cell_rejects_negative_units() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        ledger.set_cell("ST035", "SKU001", "W01", 3.0)?;

        let result = ledger.set_cell("ST035", "SKU001", "W01", -1.0);
        assert!(matches!(
            result,
            Err(Error::InvalidAmount { field: "sales units", amount }) if amount == -1.0
        ));
        assert!(ledger.set_cell("ST035", "SKU001", "W01", f64::NAN).is_err());
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W01"), 3.0);

        // Zero is a legitimate forecast
        ledger.set_cell("ST035", "SKU001", "W01", 0.0)?;
        assert_eq!(ledger.len(), 1);
        Ok(())
    }

    #[test]
    fn test_set_cell_rejects_units_above_max() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        assert!(matches!(
            ledger.set_cell("ST035", "SKU001", "W01", 1e308),
            Err(Error::InvalidAmount { field: "sales units", .. })
        ));
        assert!(ledger.is_empty());

        ledger.set_cell("ST035", "SKU001", "W01", MAX_AMOUNT)?;
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W01"), MAX_AMOUNT);
        Ok(())
    }

    #[test]
    fn test_remove_by_store_only_touches_that_store() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        ledger.set_cell("ST035", "SKU001", "W01", 1.0)?;
        ledger.set_cell("ST035", "SKU002", "W07", 2.0)?;
        ledger.set_cell("ST046", "SKU001", "W01", 3.0)?;

        assert_eq!(ledger.remove_by_store("ST035"), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get_cell("ST046", "SKU001", "W01"), 3.0);
        assert_eq!(ledger.remove_by_store("ST035"), 0);
        Ok(())
    }

    #[test]
    fn test_remove_by_sku_only_touches_that_sku() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        ledger.set_cell("ST035", "SKU001", "W01", 1.0)?;
        ledger.set_cell("ST046", "SKU001", "W02", 2.0)?;
        ledger.set_cell("ST046", "SKU002", "W02", 3.0)?;

        assert_eq!(ledger.remove_by_sku("SKU001"), 2);
        assert_eq!(ledger.get_cell("ST046", "SKU002", "W02"), 3.0);
        assert_eq!(ledger.get_cell("ST035", "SKU001", "W01"), 0.0);
        Ok(())
    }

    #[test]
    fn test_cells_are_ordered() -> Result<()> {
        let mut ledger = PlanningLedger::new();
        ledger.set_cell("ST046", "SKU001", "W02", 2.0)?;
        ledger.set_cell("ST035", "SKU002", "W01", 1.0)?;
        ledger.set_cell("ST035", "SKU001", "W03", 4.0)?;

        let cells = ledger.cells();
        let keys: Vec<(&str, &str, &str)> = cells
            .iter()
            .map(|c| (c.store_id.as_str(), c.sku_id.as_str(), c.week_id.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("ST035", "SKU001", "W03"),
                ("ST035", "SKU002", "W01"),
                ("ST046", "SKU001", "W02"),
            ]
        );
        assert_eq!(cells[0].sales_units, 4.0);
        Ok(())
    }
}
