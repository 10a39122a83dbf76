//! Transfer Engine
//!
//! Filtered, bounded item moves with leftover reconciliation.

pub mod transfer_operations;

pub use transfer_operations::{extract, transfer, transfer_shared, transfer_unfiltered, TransferOutcome};
