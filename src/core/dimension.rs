//! Dimension list business logic - ordered Store and SKU collections.
//!
//! A [`DimensionList`] keeps its records in display order and maintains the dense
//! sequence-number invariant: the record at position `i` always has `seq_no == i + 1`.
//! Adds append, removes and reorders renumber every record. Update and remove of an
//! unknown id are silent no-ops so repeated UI actions stay idempotent. Ids are
//! trimmed on the way in, by every operation that takes one.
//!
//! Removing a record here does not touch planning data. Cascades into the ledger are
//! applied by [`crate::core::state::PlanningState`].

use crate::{
    entities::Dimension,
    errors::{Error, Result},
};
use tracing::debug;

/// Ordered collection of dimension records with dense 1-based sequence numbers.
#[derive(Debug, Clone)]
pub struct DimensionList<T: Dimension> {
    records: Vec<T>,
}

impl<T: Dimension> Default for DimensionList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Dimension> DimensionList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All records in display order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Finds a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        let id = id.trim();
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns true if a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new record with `seq_no = max + 1` (1 for an empty list).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A required field is blank or a number is negative
    /// - A record with the same id already exists
    pub fn add(&mut self, draft: T::Draft) -> Result<T> {
        T::validate_draft(&draft)?;

        let next_seq_no = self.records.iter().map(T::seq_no).max().unwrap_or(0) + 1;
        let record = T::from_draft(draft, next_seq_no);

        if self.contains(record.id()) {
            return Err(Error::DuplicateKey {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }

        debug!(kind = T::KIND, id = record.id(), seq_no = next_seq_no, "Adding record");
        self.records.push(record.clone());
        Ok(record)
    }

    /// Replaces the fields of the record whose id matches the draft, keeping its
    /// `seq_no`. Returns the updated record, or `None` when the id is unknown.
    ///
    /// # Errors
    /// Returns an error if a required field is blank or a number is negative.
    pub fn update(&mut self, draft: T::Draft) -> Result<Option<T>> {
        T::validate_draft(&draft)?;

        let candidate = T::from_draft(draft, 0);
        let Some(existing) = self.records.iter_mut().find(|r| r.id() == candidate.id()) else {
            debug!(kind = T::KIND, id = candidate.id(), "Update of unknown id ignored");
            return Ok(None);
        };

        let seq_no = existing.seq_no();
        *existing = candidate;
        existing.set_seq_no(seq_no);
        debug!(kind = T::KIND, id = existing.id(), "Updated record");
        Ok(Some(existing.clone()))
    }

    /// Removes the record with this id and renumbers the rest.
    /// Returns the removed record, or `None` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let id = id.trim();
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            debug!(kind = T::KIND, id, "Remove of unknown id ignored");
            return None;
        };

        let removed = self.records.remove(position);
        self.renumber();
        debug!(kind = T::KIND, id, remaining = self.records.len(), "Removed record");
        Some(removed)
    }

    /// Moves the record at display position `from_index` to `to_index` (both 0-based)
    /// and reassigns every `seq_no` from the new order.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either index is not in `[0, len)`.
    pub fn reorder(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        let len = self.records.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }

        let moved = self.records.remove(from_index);
        self.records.insert(to_index, moved);
        self.renumber();
        debug!(kind = T::KIND, from_index, to_index, "Reordered records");
        Ok(())
    }

    fn renumber(&mut self) {
        for (seq_no, record) in (1..).zip(self.records.iter_mut()) {
            record.set_seq_no(seq_no);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::{NewSku, NewStore, Sku, Store};
    use crate::test_utils::*;

    fn seq_nos<T: Dimension>(list: &DimensionList<T>) -> Vec<u32> {
        list.all().iter().map(T::seq_no).collect()
    }

    fn ids<T: Dimension>(list: &DimensionList<T>) -> Vec<String> {
        list.all().iter().map(|r| r.id().to_string()).collect()
    }

    fn three_stores() -> Result<DimensionList<Store>> {
        let mut stores = DimensionList::new();
        for id in ["ST1", "ST2", "ST3"] {
            stores.add(new_store(id))?;
        }
        Ok(stores)
    }

    #[test]
    fn test_add_assigns_dense_seq_nos() -> Result<()> {
        let mut stores = DimensionList::<Store>::new();
        let mut skus = DimensionList::<Sku>::new();

        for i in 1..=6 {
            let store = stores.add(new_store(&format!("ST{i:03}")))?;
            assert_eq!(store.seq_no, i);
        }
        for i in 1..=4 {
            skus.add(new_sku(&format!("SKU{i:03}"), 10.0, 4.0))?;
        }

        assert_eq!(seq_nos(&stores), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(seq_nos(&skus), vec![1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_add_rejects_duplicate_id() -> Result<()> {
        let mut stores = three_stores()?;
        let result = stores.add(NewStore::new("ST2", "Other", "Reno", "NV"));
        assert!(matches!(
            result,
            Err(Error::DuplicateKey { kind: "store", ref id }) if id == "ST2"
        ));
        // Trimmed ids collide too
        assert!(stores.add(new_store(" ST3 ")).is_err());
        assert_eq!(stores.len(), 3);
        assert_eq!(stores.get("ST2").unwrap().label, "Store ST2");
        Ok(())
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut skus = DimensionList::<Sku>::new();
        assert!(matches!(
            skus.add(NewSku::new("", "Nameless", 1.0, 1.0)),
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            skus.add(NewSku::new("SKU001", "Broken", 1.0, -2.0)),
            Err(Error::InvalidAmount { field: "cost", .. })
        ));
        assert!(skus.is_empty());
    }

    #[test]
    fn test_update_preserves_seq_no() -> Result<()> {
        let mut stores = three_stores()?;
        let updated = stores
            .update(NewStore::new("ST2", "Renamed", "Tucson", "AZ"))?
            .unwrap();

        assert_eq!(updated.seq_no, 2);
        assert_eq!(updated.label, "Renamed");
        assert_eq!(stores.get("ST2").unwrap().city, "Tucson");
        assert_eq!(seq_nos(&stores), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_update_unknown_id_is_noop() -> Result<()> {
        let mut stores = three_stores()?;
        let before = stores.all().to_vec();
        assert!(stores.update(new_store("ST9"))?.is_none());
        assert_eq!(stores.all(), before.as_slice());
        Ok(())
    }

    #[test]
    fn test_update_validates() -> Result<()> {
        let mut skus = DimensionList::<Sku>::new();
        skus.add(new_sku("SKU001", 29.99, 12.50))?;
        assert!(skus.update(NewSku::new("SKU001", "T-Shirt", -5.0, 1.0)).is_err());
        assert_eq!(skus.get("SKU001").unwrap().price, 29.99);
        Ok(())
    }

    #[test]
    fn test_remove_renumbers() -> Result<()> {
        let mut stores = three_stores()?;
        let removed = stores.remove("ST1").unwrap();
        assert_eq!(removed.id, "ST1");
        assert_eq!(ids(&stores), vec!["ST2", "ST3"]);
        assert_eq!(seq_nos(&stores), vec![1, 2]);

        // Next add continues densely
        let added = stores.add(new_store("ST4"))?;
        assert_eq!(added.seq_no, 3);
        Ok(())
    }

    #[test]
    fn test_lookups_trim_ids_like_add() -> Result<()> {
        let mut stores = three_stores()?;
        stores.add(new_store("  ST4 "))?;

        assert!(stores.contains("ST4"));
        assert_eq!(stores.get(" ST2 ").unwrap().id, "ST2");
        let removed = stores.remove(" ST1 ").unwrap();
        assert_eq!(removed.id, "ST1");
        assert_eq!(ids(&stores), vec!["ST2", "ST3", "ST4"]);
        assert_eq!(seq_nos(&stores), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_remove_unknown_id_is_noop() -> Result<()> {
        let mut stores = three_stores()?;
        assert!(stores.remove("missing").is_none());
        assert_eq!(stores.len(), 3);
        Ok(())
    }

    #[test]
    fn test_reorder_moves_last_to_front() -> Result<()> {
        let mut stores = three_stores()?;
        stores.reorder(2, 0)?;
        assert_eq!(ids(&stores), vec!["ST3", "ST1", "ST2"]);
        assert_eq!(seq_nos(&stores), vec![1, 2, 3]);
        assert_eq!(stores.get("ST3").unwrap().seq_no, 1);
        Ok(())
    }

    #[test]
    fn test_reorder_moves_front_to_back() -> Result<()> {
        let mut skus = DimensionList::<Sku>::new();
        for id in ["A", "B", "C", "D"] {
            skus.add(new_sku(id, 1.0, 0.5))?;
        }
        skus.reorder(0, 2)?;
        assert_eq!(ids(&skus), vec!["B", "C", "A", "D"]);
        assert_eq!(seq_nos(&skus), vec![1, 2, 3, 4]);

        // Same position is a no-op on order
        skus.reorder(1, 1)?;
        assert_eq!(ids(&skus), vec!["B", "C", "A", "D"]);
        Ok(())
    }

    #[test]
    fn test_reorder_out_of_range() -> Result<()> {
        let mut stores = three_stores()?;
        assert!(matches!(
            stores.reorder(3, 0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            stores.reorder(0, 7),
            Err(Error::IndexOutOfRange { index: 7, len: 3 })
        ));
        assert_eq!(ids(&stores), vec!["ST1", "ST2", "ST3"]);

        let mut empty = DimensionList::<Store>::new();
        assert!(empty.reorder(0, 0).is_err());
        Ok(())
    }
}
