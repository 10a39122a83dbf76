//! Filter Pipeline
//!
//! Ordered inclusion rules evaluated with OR semantics.

pub mod filter_data;
pub mod filter_operations;

pub use filter_data::{Filter, HopperFilter};
pub use filter_operations::{
    filter_accepts, filters_for_hopper, hopper_accepts, matches, matching_filter,
};
