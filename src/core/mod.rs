//! Core business logic - framework-agnostic planning operations.
//!
//! The presentation layer talks to [`state::PlanningState`]; the other modules are the
//! building blocks it composes and the read models it exposes.

/// 52-week calendar generation and month grouping
pub mod calendar;
/// Derived sales and margin metrics
pub mod derive;
/// Ordered Store/SKU collections with dense sequence numbers
pub mod dimension;
/// Planning grid rows and column field handling
pub mod grid;
/// Sparse sales-unit ledger
pub mod ledger;
/// Display formatting and the text chart
pub mod report;
/// Composition root owning all planning data
pub mod state;

pub use state::PlanningState;
