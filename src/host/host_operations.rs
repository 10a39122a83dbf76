//! Host Operations - Pure DOP Functions

use super::host_data::{HostCommand, HostOutbox, SoundCue};
use crate::constants::sound::{CHEST_PITCH, CHEST_VOLUME};
use crate::world::{LocationInfo, PlayerData};
use cgmath::Point3;

/// Queue a command for the host
pub fn push_command(outbox: &mut HostOutbox, command: HostCommand) {
    log::debug!("[Host::push_command] {:?}", command);
    outbox.pending.push_back(command);
}

/// Take every pending command, oldest first
pub fn drain_commands(outbox: &mut HostOutbox) -> Vec<HostCommand> {
    outbox.pending.drain(..).collect()
}

/// Number of commands waiting for the host
pub fn pending_commands(outbox: &HostOutbox) -> usize {
    outbox.pending.len()
}

/// Queue a chest cue at a player's feet
pub fn play_sound_at_player(outbox: &mut HostOutbox, player: &PlayerData, cue: SoundCue) {
    push_command(
        outbox,
        HostCommand::PlaySound {
            world: player.world.clone(),
            position: player.position,
            cue,
            volume: CHEST_VOLUME,
            pitch: CHEST_PITCH,
        },
    );
}

/// Queue a chest cue at a block's corner, as the host addresses block sounds
pub fn play_sound_at_location(outbox: &mut HostOutbox, location: &LocationInfo, cue: SoundCue) {
    let pos = location.position;
    push_command(
        outbox,
        HostCommand::PlaySound {
            world: location.world.clone(),
            position: Point3::new(pos.x as f32, pos.y as f32, pos.z as f32),
            cue,
            volume: CHEST_VOLUME,
            pitch: CHEST_PITCH,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryId;
    use crate::world::{PlayerId, VoxelPos, WorldId};

    #[test]
    fn test_drain_keeps_order() {
        let mut outbox = HostOutbox::default();
        push_command(
            &mut outbox,
            HostCommand::OpenInventory {
                player: PlayerId(1),
                inventory: InventoryId(1),
            },
        );
        play_sound_at_location(
            &mut outbox,
            &LocationInfo::new(WorldId::new("nether"), VoxelPos::new(3, 4, 5)),
            SoundCue::ChestClose,
        );
        assert_eq!(pending_commands(&outbox), 2);

        let drained = drain_commands(&mut outbox);
        assert!(matches!(drained[0], HostCommand::OpenInventory { .. }));
        match &drained[1] {
            HostCommand::PlaySound {
                world,
                position,
                cue,
                volume,
                pitch,
            } => {
                assert_eq!(world, &WorldId::new("nether"));
                assert_eq!(*position, Point3::new(3.0, 4.0, 5.0));
                assert_eq!(*cue, SoundCue::ChestClose);
                assert_eq!(*volume, 0.5);
                assert_eq!(*pitch, 1.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(pending_commands(&outbox), 0);
    }
}
