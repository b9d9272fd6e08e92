//! Weekly scheduling of the export job.
//!
//! The schedule is plain configuration (weekday + local fire time) and the
//! current time comes from an injectable [`Clock`], so the polling loop can
//! be driven in tests without waiting for real time to pass.

pub mod clock;
pub mod runner;
pub mod weekly;

pub use clock::{Clock, FixedClock, SystemClock};
pub use runner::{Scheduler, run_scheduler_loop};
pub use weekly::WeeklySchedule;
