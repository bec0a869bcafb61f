//! Core data models for pocket-ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: entries, entry identifiers, and money amounts.

pub mod entry;
pub mod ids;
pub mod money;

pub use entry::{Entry, EntryKind};
pub use ids::EntryId;
pub use money::Money;
