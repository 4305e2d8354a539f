//! Combat resolution.
//!
//! This module provides pure functions for resolving attacks between two
//! stat-bearing participants. Resolution is deterministic: the critical roll
//! is passed in by the caller (derived from [`crate::env::RngOracle`] in the
//! runtime, or a literal in tests), and no participant is mutated here.
//! Callers apply the returned damage through
//! [`crate::stats::StatsProvider::modify_stat`] and raise death notifications
//! themselves, which keeps the resolver independently testable.

mod params;
mod resolve;

pub use params::CombatParams;
pub use resolve::{AttackResult, resolve_attack};
