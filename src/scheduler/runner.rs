//! Cooperative polling loop driving the weekly job

use chrono::{DateTime, Local};
use std::future::Future;
use std::time::Duration;
use tracing::info;

use super::clock::Clock;
use super::weekly::WeeklySchedule;

/// Tracks when the weekly job should next run.
#[derive(Debug, Clone)]
pub struct Scheduler {
    schedule: WeeklySchedule,
    next_run: DateTime<Local>,
}

impl Scheduler {
    /// Creates a scheduler whose first run is the next fire time after `now`.
    pub fn new(schedule: WeeklySchedule, now: DateTime<Local>) -> Self {
        Self {
            schedule,
            next_run: schedule.next_after(now),
        }
    }

    pub fn schedule(&self) -> WeeklySchedule {
        self.schedule
    }

    pub fn next_run(&self) -> DateTime<Local> {
        self.next_run
    }

    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        now >= self.next_run
    }

    /// Records a completed run and moves `next_run` to the following fire time.
    pub fn mark_ran(&mut self, now: DateTime<Local>) {
        self.next_run = self.schedule.next_after(now);
    }
}

/// Polls `clock` every `poll_interval` and runs `job` to completion whenever
/// the scheduler is due. Returns the number of completed runs once
/// `shutdown` resolves.
///
/// The job reports its own failures; nothing it does can stop the loop.
pub async fn run_scheduler_loop<C, F, Fut, S>(
    scheduler: &mut Scheduler,
    clock: &C,
    poll_interval: Duration,
    mut job: F,
    shutdown: S,
) -> usize
where
    C: Clock + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut runs = 0usize;

    let schedule = scheduler.schedule();
    info!(
        "Scheduler started ({} at {}), next run at {}",
        schedule.weekday,
        schedule.fire_time.format("%H:%M"),
        scheduler.next_run().format("%Y-%m-%d %H:%M")
    );

    loop {
        if scheduler.is_due(clock.now()) {
            info!("Scheduled job starting at {}", clock.now());
            job().await;
            runs += 1;
            scheduler.mark_ran(clock.now());
            info!(
                "Scheduled job finished, next run at {}",
                scheduler.next_run().format("%Y-%m-%d %H:%M")
            );
        }

        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, stopping scheduler after {runs} runs");
                break;
            }
            _ = tokio::time::sleep(poll_interval) => {}
        }
    }

    runs
}
