use super::VoxelPos;
use cgmath::{InnerSpace, Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// Face of a block, named after the direction it points in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    North, // -Z
    East,  // +X
    South, // +Z
    West,  // -X
    Up,    // +Y
    Down,  // -Y
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::North,
        BlockFace::East,
        BlockFace::South,
        BlockFace::West,
        BlockFace::Up,
        BlockFace::Down,
    ];

    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            BlockFace::North => (0, 0, -1),
            BlockFace::East => (1, 0, 0),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::Down => (0, -1, 0),
        }
    }

    pub fn normal(&self) -> Vector3<f32> {
        let (x, y, z) = self.offset();
        Vector3::new(x as f32, y as f32, z as f32)
    }

    pub fn opposite(&self) -> BlockFace {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::East => BlockFace::West,
            BlockFace::South => BlockFace::North,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
        }
    }

    /// Face of `from` that touches `to`, if the two blocks share a face
    pub fn between(from: VoxelPos, to: VoxelPos) -> Option<BlockFace> {
        let delta = (to.x - from.x, to.y - from.y, to.z - from.z);
        BlockFace::ALL
            .iter()
            .copied()
            .find(|face| face.offset() == delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_adjacent() {
        let a = VoxelPos::new(0, 0, 0);
        assert_eq!(
            BlockFace::between(a, VoxelPos::new(0, 0, 1)),
            Some(BlockFace::South)
        );
        assert_eq!(
            BlockFace::between(a, VoxelPos::new(0, 1, 0)),
            Some(BlockFace::Up)
        );
    }

    #[test]
    fn test_between_not_adjacent() {
        let a = VoxelPos::new(0, 0, 0);
        assert_eq!(BlockFace::between(a, VoxelPos::new(1, 0, 1)), None);
        assert_eq!(BlockFace::between(a, a), None);
    }

    #[test]
    fn test_opposite_round_trip() {
        for face in BlockFace::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.normal() + face.opposite().normal(), Vector3::new(0.0, 0.0, 0.0));
        }
    }
}
