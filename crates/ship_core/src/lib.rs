//! `ship_core` — vessel status report pipeline.
//!
//! No IO, no network, no clock. One synchronous pass over a vessel's parts
//! produces an immutable `Report` snapshot, or `None` when the observer does
//! not own the vessel.

mod aggregate;
mod report;
mod types;
mod visitor;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use aggregate::{format_quantity, ResourceAggregator};
pub use report::{vessel_owned, ReportBuilder};
pub use types::*;
pub use visitor::{CommandStatusVisitor, PartVisitor, KERBAL_SEAT, MODULE_COMMAND};
