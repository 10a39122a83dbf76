//! Linked storage walkthrough
//!
//! Builds a small world with three chests (one in an unloaded region), links
//! them, opens the group, runs a tick, and moves items between inventories.

use anyhow::Result;
use cgmath::Point3;
use chestlink_engine::{
    constants::inventory::{CHEST_SLOTS, HOPPER_SLOTS},
    error::ErrorContext,
    init_logging,
    inventory::{add_item, create_inventory, total_items},
    settings::settings_from_toml,
    transfer, world, Filter, ItemStack, LocationInfo, Material, PlayerData, PlayerId,
    StorageEngine, VoxelPos, WorldData, WorldId,
};

const SETTINGS: &str = r#"
animate_all_linked_containers = true
decorative_entities_hidden_by_default = false
engine_version = "1.16.5"
"#;

fn main() -> Result<()> {
    init_logging();

    let settings = settings_from_toml(SETTINGS).context("Failed to parse demo settings")?;
    let mut engine = StorageEngine::start(settings)?;

    let world_id = WorldId::new("world");
    let chests = [
        VoxelPos::new(0, 64, 0),
        VoxelPos::new(2, 64, 0),
        VoxelPos::new(200, 64, 200),
    ];

    let mut overworld = WorldData::new(world_id.clone());
    for pos in chests {
        world::load_region(&mut overworld, pos.region());
        world::place_container(&mut overworld, pos, Material::Chest, CHEST_SLOTS)?;
    }
    world::unload_region(&mut overworld, chests[2].region());
    world::insert_world(engine.worlds_mut(), overworld);

    let locations: Vec<LocationInfo> = chests
        .iter()
        .map(|pos| LocationInfo::new(world_id.clone(), *pos))
        .collect();
    engine.log_stats();
    let mut group = engine.link_containers(locations.clone())?;
    println!(
        "Linked {} chests into {} slots",
        group.locations.len(),
        group.inventory.slots.len()
    );

    let player = PlayerData {
        id: PlayerId(0x5eed),
        world: world_id,
        position: Point3::new(1.5, 64.0, 3.5),
        eye_position: Point3::new(1.5, 65.62, 3.5),
        yaw_radians: -std::f32::consts::FRAC_PI_2,
        pitch_radians: 0.0,
    };

    let queued = engine.open_chest_inventory(&player, &group, &locations[0]);
    println!("Queued {} lid animations", queued);
    let report = engine.tick();
    println!(
        "Tick {}: {} lids moved, {} skipped",
        report.tick, report.applied, report.skipped
    );
    for command in engine.drain_host_commands() {
        println!("Host command: {:?}", command);
    }

    add_item(&mut group.inventory, ItemStack::new(Material::Diamond, 10));
    add_item(&mut group.inventory, ItemStack::new(Material::Cobblestone, 40));

    let mut hopper = create_inventory(HOPPER_SLOTS);
    let filters = vec![Filter::material(Material::Diamond)];
    let outcome = transfer(&mut group.inventory, 6, &mut hopper, Some(filters.as_slice()));
    println!(
        "Moved diamonds: {:?} (group now {}, hopper {})",
        outcome,
        total_items(&group.inventory),
        total_items(&hopper)
    );

    engine.close_chest_inventory(&group, &locations[0]);
    engine.close_inventory_sound(&player, &group.inventory);
    engine.tick();
    for command in engine.drain_host_commands() {
        println!("Host command: {:?}", command);
    }

    Ok(())
}
