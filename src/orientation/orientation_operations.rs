//! Orientation Operations - Pure DOP Functions
//!
//! Cardinal facings derived from where a player looks or stands. Consulted
//! when a newly placed container decides what it links to.

use crate::constants::world::MAX_VIEW_DISTANCE;
use crate::provider::CapabilityProvider;
use crate::world::{
    get_block, get_container, last_two_target_blocks, BlockFace, PlayerData, Ray, VoxelPos,
    WorldData,
};
use cgmath::Vector3;

/// How a freshly placed container sits and what it should link to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChestPlacement {
    /// Side of the placed block that faces the player
    pub facing: Option<BlockFace>,

    /// Container the player clicked against, if it sits beside the new block
    pub link: Option<VoxelPos>,
}

/// Unit view direction from yaw and pitch
pub fn view_direction(player: &PlayerData) -> Vector3<f32> {
    let (yaw, pitch) = (player.yaw_radians, player.pitch_radians);
    Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
}

/// Face of the targeted block the player is looking at
///
/// Samples the last two blocks along the view ray. Returns None when fewer
/// than two were found, when the far block does not occlude, or when the two
/// do not share a face.
pub fn view_facing(
    player: &PlayerData,
    world: &WorldData,
    provider: &dyn CapabilityProvider,
) -> Option<BlockFace> {
    let ray = Ray::new(player.eye_position, view_direction(player));
    let blocks = last_two_target_blocks(world, ray, MAX_VIEW_DISTANCE, |material| {
        provider.classify(material).is_air()
    });

    let [near, far] = blocks.as_slice() else {
        return None;
    };
    if !provider.classify(get_block(world, *far)).is_occluding() {
        return None;
    }
    BlockFace::between(*far, *near)
}

/// Bucket a horizontal angle in degrees into a cardinal face
///
/// Intervals are closed at the top: `(-45, 45]` East, `(45, 135]` South,
/// `(-135, -45]` North, everything else West. An exact boundary therefore
/// lands in the bucket below it (45 is East, -135 is West).
pub fn facing_for_angle(degrees: f64) -> Option<BlockFace> {
    if degrees.is_nan() {
        return None;
    }
    let face = if degrees > -45.0 && degrees <= 45.0 {
        BlockFace::East
    } else if degrees > 45.0 && degrees <= 135.0 {
        BlockFace::South
    } else if degrees > -135.0 && degrees <= -45.0 {
        BlockFace::North
    } else {
        BlockFace::West
    };
    Some(face)
}

/// Side of a placed block that points at the player's eye, ignoring height
///
/// A player standing exactly over the block centre gets East (atan2 of zero).
pub fn placement_facing(player: &PlayerData, placed: VoxelPos) -> Option<BlockFace> {
    let (center_x, center_z) = placed.horizontal_center();
    let dx = (player.eye_position.x - center_x) as f64;
    let dz = (player.eye_position.z - center_z) as f64;
    facing_for_angle(dz.atan2(dx).to_degrees())
}

/// True for exactly the four cardinal faces
pub fn is_horizontal(face: BlockFace) -> bool {
    matches!(
        face,
        BlockFace::North | BlockFace::East | BlockFace::South | BlockFace::West
    )
}

/// True for any kind of air at `pos`
pub fn is_air(world: &WorldData, pos: VoxelPos, provider: &dyn CapabilityProvider) -> bool {
    provider.classify(get_block(world, pos)).is_air()
}

/// Work out facing and link candidate for a container placed at `placed`
///
/// The link candidate is the block the player was looking at, accepted only
/// when the view face is horizontal, the block is adjacent to `placed` and it
/// is a linkable container.
pub fn resolve_placement(
    player: &PlayerData,
    placed: VoxelPos,
    world: &WorldData,
    provider: &dyn CapabilityProvider,
) -> ChestPlacement {
    let link = view_facing(player, world, provider)
        .filter(|face| is_horizontal(*face))
        .map(|face| placed.relative(face.opposite()))
        .filter(|candidate| {
            get_container(world, *candidate)
                .map(|state| provider.classify(state.material).is_linkable_container())
                .unwrap_or(false)
        });

    ChestPlacement {
        facing: placement_facing(player, placed),
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::inventory::BARREL_SLOTS;
    use crate::provider::resolve_provider;
    use crate::world::{
        load_region, place_container, set_block, Material, PlayerId, RegionPos, WorldId,
    };
    use cgmath::Point3;

    fn player_at(eye: Point3<f32>, yaw_degrees: f32, pitch_degrees: f32) -> PlayerData {
        PlayerData {
            id: PlayerId(1),
            world: WorldId::new("world"),
            position: Point3::new(eye.x, eye.y - 1.62, eye.z),
            eye_position: eye,
            yaw_radians: yaw_degrees.to_radians(),
            pitch_radians: pitch_degrees.to_radians(),
        }
    }

    fn test_world() -> WorldData {
        let mut world = WorldData::new(WorldId::new("world"));
        load_region(&mut world, RegionPos::new(0, 0));
        world
    }

    #[test]
    fn test_facing_boundaries() {
        assert_eq!(facing_for_angle(0.0), Some(BlockFace::East));
        assert_eq!(facing_for_angle(45.0), Some(BlockFace::East));
        assert_eq!(facing_for_angle(45.0001), Some(BlockFace::South));
        assert_eq!(facing_for_angle(135.0), Some(BlockFace::South));
        assert_eq!(facing_for_angle(-45.0), Some(BlockFace::North));
        assert_eq!(facing_for_angle(-44.9999), Some(BlockFace::East));
        assert_eq!(facing_for_angle(-135.0), Some(BlockFace::West));
        assert_eq!(facing_for_angle(180.0), Some(BlockFace::West));
        assert_eq!(facing_for_angle(f64::NAN), None);
    }

    #[test]
    fn test_placement_facing_points_at_player() {
        let placed = VoxelPos::new(0, 64, 0);
        // Player east of the block (+X)
        let player = player_at(Point3::new(4.5, 65.6, 0.5), 180.0, 0.0);
        assert_eq!(placement_facing(&player, placed), Some(BlockFace::East));
        // Player south of the block (+Z)
        let player = player_at(Point3::new(0.5, 65.6, 4.5), -90.0, 0.0);
        assert_eq!(placement_facing(&player, placed), Some(BlockFace::South));
        // Player west, slightly north
        let player = player_at(Point3::new(-3.5, 65.6, -0.5), 0.0, 0.0);
        assert_eq!(placement_facing(&player, placed), Some(BlockFace::West));
    }

    #[test]
    fn test_is_horizontal() {
        assert!(is_horizontal(BlockFace::North));
        assert!(is_horizontal(BlockFace::West));
        assert!(!is_horizontal(BlockFace::Up));
        assert!(!is_horizontal(BlockFace::Down));
    }

    #[test]
    fn test_is_air_covers_cave_air() {
        let provider = resolve_provider("1.14").unwrap();
        let mut world = test_world();
        let pos = VoxelPos::new(2, 10, 2);
        assert!(is_air(&world, pos, provider.as_ref()));
        set_block(&mut world, pos, Material::CaveAir).unwrap();
        assert!(is_air(&world, pos, provider.as_ref()));
        set_block(&mut world, pos, Material::Torch).unwrap();
        assert!(!is_air(&world, pos, provider.as_ref()));
    }

    #[test]
    fn test_view_facing_looks_at_wall() {
        let provider = resolve_provider("1.16").unwrap();
        let mut world = test_world();
        set_block(&mut world, VoxelPos::new(5, 64, 0), Material::Stone).unwrap();

        // Looking along +X from the west
        let player = player_at(Point3::new(0.5, 64.5, 0.5), 0.0, 0.0);
        assert_eq!(view_facing(&player, &world, provider.as_ref()), Some(BlockFace::West));
    }

    #[test]
    fn test_view_facing_non_occluding_target() {
        let provider = resolve_provider("1.16").unwrap();
        let mut world = test_world();
        set_block(&mut world, VoxelPos::new(5, 64, 0), Material::Glass).unwrap();

        let player = player_at(Point3::new(0.5, 64.5, 0.5), 0.0, 0.0);
        assert_eq!(view_facing(&player, &world, provider.as_ref()), None);
    }

    #[test]
    fn test_view_facing_nothing_in_range() {
        let provider = resolve_provider("1.16").unwrap();
        let world = test_world();
        let player = player_at(Point3::new(0.5, 64.5, 0.5), 0.0, 0.0);
        assert_eq!(view_facing(&player, &world, provider.as_ref()), None);
    }

    #[test]
    fn test_view_facing_eye_inside_block() {
        let provider = resolve_provider("1.16").unwrap();
        let mut world = test_world();
        set_block(&mut world, VoxelPos::new(0, 64, 0), Material::Stone).unwrap();
        let player = player_at(Point3::new(0.5, 64.5, 0.5), 0.0, 0.0);
        assert_eq!(view_facing(&player, &world, provider.as_ref()), None);
    }

    #[test]
    fn test_resolve_placement_links_clicked_barrel() {
        let provider = resolve_provider("1.16").unwrap();
        let mut world = test_world();
        let barrel = VoxelPos::new(5, 64, 0);
        place_container(&mut world, barrel, Material::Barrel, BARREL_SLOTS).unwrap();

        let player = player_at(Point3::new(0.5, 64.5, 0.5), 0.0, 0.0);
        let placed = VoxelPos::new(4, 64, 0);
        let placement = resolve_placement(&player, placed, &world, provider.as_ref());
        assert_eq!(placement.link, Some(barrel));
        assert_eq!(placement.facing, Some(BlockFace::West));
    }

    #[test]
    fn test_resolve_placement_rejects_vertical() {
        let provider = resolve_provider("1.16").unwrap();
        let mut world = test_world();
        let barrel = VoxelPos::new(0, 60, 0);
        place_container(&mut world, barrel, Material::Barrel, BARREL_SLOTS).unwrap();

        // Looking straight down onto the barrel's top face
        let player = player_at(Point3::new(0.5, 64.5, 0.5), 0.0, -90.0);
        assert_eq!(view_facing(&player, &world, provider.as_ref()), Some(BlockFace::Up));
        let placement = resolve_placement(&player, VoxelPos::new(0, 61, 0), &world, provider.as_ref());
        assert_eq!(placement.link, None);
    }
}
