//! Host Outbox
//!
//! Everything the core needs the host to do, queued as data.

pub mod host_data;
pub mod host_operations;

pub use host_data::{HostCommand, HostOutbox, SoundCue};
pub use host_operations::{
    drain_commands, pending_commands, play_sound_at_location, play_sound_at_player, push_command,
};
