//! Tick Scheduler
//!
//! Deferred tasks for the single-threaded tick loop.

pub mod scheduler_data;
pub mod scheduler_operations;

pub use scheduler_data::{PendingTask, ScheduledTask, TickReport, TickScheduler};
pub use scheduler_operations::{pending_count, run_due, schedule_after};
