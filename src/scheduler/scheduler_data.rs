//! Scheduler Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Scheduling and firing happen in scheduler_operations.rs

use crate::inventory::InventoryId;
use crate::world::LocationInfo;
use std::collections::VecDeque;

/// Deferred work run on a later tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Drive one container lid on behalf of a merged inventory
    LidAnimation {
        inventory: InventoryId,
        location: LocationInfo,
        open: bool,
    },
}

/// Task with the tick it becomes due on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTask {
    pub due_tick: u64,
    pub task: ScheduledTask,
}

/// Cooperative tick scheduler
///
/// `pending` is sorted by due tick; tasks due on the same tick keep their
/// scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    pub current_tick: u64,
    pub pending: VecDeque<PendingTask>,
}

/// What one tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Tasks whose container was still valid when they fired
    pub applied: usize,
    /// Tasks that ran as no-ops because their target went stale
    pub skipped: usize,
}
