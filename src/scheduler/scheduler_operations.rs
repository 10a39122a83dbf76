//! Scheduler Operations - Pure DOP Functions
//!
//! Queue deferred tasks and fire them when their tick comes. A task checks
//! its target again when it fires; nothing is ever cancelled.

use super::scheduler_data::{PendingTask, ScheduledTask, TickReport, TickScheduler};
use crate::provider::CapabilityProvider;
use crate::world::{is_region_loaded, resolve_location, WorldsData};

/// Queue `task` to run `delay_ticks` after the current tick
pub fn schedule_after(scheduler: &mut TickScheduler, delay_ticks: u64, task: ScheduledTask) {
    let due_tick = scheduler.current_tick + delay_ticks;
    log::debug!(
        "[Scheduler::schedule_after] {:?} due on tick {}",
        task,
        due_tick
    );
    let index = scheduler
        .pending
        .partition_point(|pending| pending.due_tick <= due_tick);
    scheduler.pending.insert(index, PendingTask { due_tick, task });
}

/// Tasks not yet fired
pub fn pending_count(scheduler: &TickScheduler) -> usize {
    scheduler.pending.len()
}

/// Advance one tick and run everything now due, in scheduling order
pub fn run_due(
    scheduler: &mut TickScheduler,
    worlds: &mut WorldsData,
    provider: &dyn CapabilityProvider,
) -> TickReport {
    scheduler.current_tick += 1;
    let mut report = TickReport {
        tick: scheduler.current_tick,
        ..Default::default()
    };

    while scheduler
        .pending
        .front()
        .map_or(false, |pending| pending.due_tick <= scheduler.current_tick)
    {
        let Some(pending) = scheduler.pending.pop_front() else {
            break;
        };
        if run_task(&pending.task, worlds, provider) {
            report.applied += 1;
        } else {
            report.skipped += 1;
        }
    }

    report
}

fn run_task(task: &ScheduledTask, worlds: &mut WorldsData, provider: &dyn CapabilityProvider) -> bool {
    match task {
        ScheduledTask::LidAnimation {
            inventory,
            location,
            open,
        } => {
            let Some(container) = resolve_location(worlds, location) else {
                log::debug!(
                    "[Scheduler::run_task] {} no longer a container; skipping lid animation",
                    location
                );
                return false;
            };
            let region = container.position.region();
            if !is_region_loaded(worlds, &location.world, region.x, region.z) {
                log::debug!(
                    "[Scheduler::run_task] Region of {} unloaded; skipping lid animation",
                    location
                );
                return false;
            }
            let Some(world) = worlds.worlds.get_mut(&location.world) else {
                return false;
            };
            provider.open_animation(world, *inventory, container.position, *open);
            true
        }
    }
}
