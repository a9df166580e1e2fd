//! Seed data loading from a TOML file.
//!
//! A seed file lists the stores, SKUs and (optionally) planning cells to start a
//! session with. Records are applied through the regular [`PlanningState`]
//! operations, so seeding is subject to the same validation as interactive edits.
//! When no seed file exists the built-in sample data set is used instead.

use crate::{
    core::PlanningState,
    entities::{NewSku, NewStore, PlanningCell},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{io, path::Path};
use tracing::{info, instrument, warn};

/// Structure of the whole seed file.
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Stores, added in file order
    #[serde(default)]
    pub stores: Vec<NewStore>,
    /// SKUs, added in file order
    #[serde(default)]
    pub skus: Vec<NewSku>,
    /// Optional initial forecasts
    #[serde(default)]
    pub cells: Vec<PlanningCell>,
}

/// Parses seed data from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed data: {e}"),
    })
}

/// Loads seed data from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads the seed file if it exists, otherwise returns [`sample_seed`].
///
/// Only a missing file falls back to the sample data.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read ([`Error::Io`])
/// - The contents cannot be parsed ([`Error::Config`])
pub fn load_or_sample<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    match std::fs::read_to_string(path_ref) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "Seed file {} not found, using built-in sample data",
                path_ref.display()
            );
            Ok(sample_seed())
        }
        Err(e) => Err(e.into()),
    }
}

/// The sample stores and SKUs the planner ships with.
#[must_use]
pub fn sample_seed() -> SeedConfig {
    SeedConfig {
        stores: vec![
            NewStore::new("ST035", "San Francisco Bay Trends", "San Francisco", "CA"),
            NewStore::new("ST046", "Phoenix Sunwear", "Phoenix", "AZ"),
            NewStore::new("ST064", "Dallas Ranch Supply", "Dallas", "TX"),
            NewStore::new("ST066", "Atlanta Outfitters", "Atlanta", "GA"),
            NewStore::new("ST073", "Nashville Melody Music Store", "Nashville", "TN"),
        ],
        skus: vec![
            NewSku::new("SKU001", "Premium T-Shirt", 29.99, 12.50),
            NewSku::new("SKU002", "Denim Jeans", 59.99, 24.75),
            NewSku::new("SKU003", "Sneakers", 89.99, 45.00),
        ],
        cells: Vec::new(),
    }
}

/// Applies seed data to a state: stores, then SKUs, then cells.
///
/// # Errors
/// Returns the first validation, duplicate-id or missing-reference error encountered.
/// Records applied before the failing one stay in the state.
#[instrument(skip_all, fields(stores = seed.stores.len(), skus = seed.skus.len(), cells = seed.cells.len()))]
pub fn seed_state(state: &mut PlanningState, seed: SeedConfig) -> Result<()> {
    for store in seed.stores {
        state.add_store(store)?;
    }
    for sku in seed.skus {
        state.add_sku(sku)?;
    }
    for cell in seed.cells {
        state.set_cell(&cell.store_id, &cell.sku_id, &cell.week_id, cell.sales_units)?;
    }
    info!(
        stores = state.stores().len(),
        skus = state.skus().len(),
        cells = state.ledger().len(),
        "Planning state seeded"
    );
    Ok(())
}

/// Builds a fresh state from seed data.
///
/// # Errors
/// See [`seed_state`].
pub fn build_state(seed: SeedConfig) -> Result<PlanningState> {
    let mut state = PlanningState::new();
    seed_state(&mut state, seed)?;
    Ok(state)
}
