//! Engine-wide constants
//!
//! Values that match the host engine's fixed behaviour. Nothing here is
//! configurable at runtime.

/// World geometry
pub mod world {
    /// Blocks per region edge is `1 << REGION_SHIFT` (16)
    pub const REGION_SHIFT: i32 = 4;

    /// Maximum distance walked along a player's view ray, in blocks
    pub const MAX_VIEW_DISTANCE: f32 = 100.0;
}

/// Scheduling
pub mod scheduling {
    /// Delay before a lid animation runs, in ticks
    pub const ANIMATION_DELAY_TICKS: u64 = 1;
}

/// Inventory sizes
pub mod inventory {
    /// Slots in a single chest
    pub const CHEST_SLOTS: usize = 27;

    /// Slots in a barrel
    pub const BARREL_SLOTS: usize = 27;

    /// Slots in a hopper
    pub const HOPPER_SLOTS: usize = 5;

    /// Default stack size for stackable items
    pub const DEFAULT_MAX_STACK: u32 = 64;
}

/// Sound cue parameters
pub mod sound {
    pub const CHEST_VOLUME: f32 = 0.5;
    pub const CHEST_PITCH: f32 = 1.0;
}
