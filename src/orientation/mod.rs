//! Orientation Resolver
//!
//! Pure facing computations used during link formation.

pub mod orientation_operations;

pub use orientation_operations::{
    facing_for_angle, is_air, is_horizontal, placement_facing, resolve_placement, view_direction,
    view_facing, ChestPlacement,
};
