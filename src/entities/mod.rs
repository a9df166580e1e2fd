//! Entity module - plain records shared by the core and the presentation layer.
//!
//! Stores and SKUs are ordered dimension records. They implement [`Dimension`] so a
//! single generic list in [`crate::core::dimension`] can own both. Weeks are fixed
//! calendar buckets, and planning cells are the sparse user-entered forecasts.

pub mod planning_cell;
pub mod sku;
pub mod store;
pub mod week;

pub use planning_cell::PlanningCell;
pub use sku::{NewSku, Sku};
pub use store::{NewStore, Store};
pub use week::Week;

use crate::errors::{Error, Result};
use std::fmt;

/// A dimension record with a unique id and a dense, 1-based display position.
///
/// `Draft` is the record as the caller submits it, without a sequence number.
pub trait Dimension: Clone + fmt::Debug {
    /// Caller-facing shape of the record, everything except `seq_no`.
    type Draft: fmt::Debug;

    /// Lowercase record kind used in errors and logs.
    const KIND: &'static str;

    /// Unique, user-assigned identifier.
    fn id(&self) -> &str;

    /// 1-based display position.
    fn seq_no(&self) -> u32;

    /// Overwrites the display position.
    fn set_seq_no(&mut self, seq_no: u32);

    /// Rejects drafts with blank required fields or invalid numbers.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] or [`Error::InvalidAmount`].
    fn validate_draft(draft: &Self::Draft) -> Result<()>;

    /// Builds a record from a validated draft, trimming text fields.
    fn from_draft(draft: Self::Draft, seq_no: u32) -> Self;
}

pub(crate) fn require_text(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Upper bound for sales units, prices and costs.
///
/// Any product of two bounded amounts, and any sum of such products over a store's
/// SKUs, stays finite, so derived dollars and percentages are never `inf` or `NaN`.
pub const MAX_AMOUNT: f64 = 1.0e12;

pub(crate) fn require_amount(field: &'static str, amount: f64) -> Result<()> {
    if !(0.0..=MAX_AMOUNT).contains(&amount) {
        return Err(Error::InvalidAmount { field, amount });
    }
    Ok(())
}
