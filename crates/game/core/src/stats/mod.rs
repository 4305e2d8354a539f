//! Per-entity stat model.
//!
//! Every combat participant carries a [`StatTable`]: a mapping from a closed
//! set of named attributes to floating-point values. All combat math reads
//! through this table, and all mutation funnels through
//! [`StatTable::modify`] so the clamping invariants are re-established at a
//! single choke point.

mod attribute;
mod provider;
mod table;

pub use attribute::Attribute;
pub use provider::StatsProvider;
pub use table::StatTable;
