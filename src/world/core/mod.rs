//! Core world data types and fundamental structures
//!
//! Positions, faces, rays and materials shared by every other module.

mod block;
mod position;
mod ray;

pub use block::{Material, MaterialCategory};
pub use position::{RegionPos, VoxelPos};
pub use ray::{BlockFace, Ray};
