//! Shared test utilities for the planner.
//!
//! This module provides helpers for building planning states and records with
//! sensible defaults, plus tracing setup and float comparison.

use crate::{
    core::PlanningState,
    entities::{NewSku, NewStore, Sku},
    errors::Result,
};
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A store draft with the label "Store {id}".
pub fn new_store(id: &str) -> NewStore {
    NewStore::new(id, &format!("Store {id}"), "Springfield", "IL")
}

/// A SKU draft with the label "SKU {id}".
pub fn new_sku(id: &str, price: f64, cost: f64) -> NewSku {
    NewSku::new(id, &format!("SKU {id}"), price, cost)
}

/// A standalone SKU record at position 1, for derivation tests.
pub fn sku_record(id: &str, price: f64, cost: f64) -> Sku {
    Sku {
        id: id.to_string(),
        seq_no: 1,
        label: format!("SKU {id}"),
        price,
        cost,
    }
}

/// Sets up a state with two stores and two SKUs and no planning cells.
///
/// # Defaults
/// * Stores: `ST035`, `ST046`
/// * SKUs: `SKU001` (29.99 / 12.50), `SKU002` (59.99 / 24.75)
pub fn setup_state() -> Result<PlanningState> {
    let mut state = PlanningState::new();
    state.add_store(NewStore::new(
        "ST035",
        "San Francisco Bay Trends",
        "San Francisco",
        "CA",
    ))?;
    state.add_store(NewStore::new("ST046", "Phoenix Sunwear", "Phoenix", "AZ"))?;
    state.add_sku(NewSku::new("SKU001", "Premium T-Shirt", 29.99, 12.50))?;
    state.add_sku(NewSku::new("SKU002", "Denim Jeans", 59.99, 24.75))?;
    Ok(state)
}

/// Asserts two floats are equal within 1e-6.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
