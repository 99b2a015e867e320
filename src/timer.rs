//! Countdown timer driving `tick` events into a shared store.
//!
//! A timer belongs to exactly one run of the quiz. It dispatches one `tick`
//! per interval while that run is active and stops on its own as soon as the
//! quiz leaves the active phase or a newer run starts. Dropping the
//! [`TimerHandle`] cancels the task.

use crate::quiz::{QuizEvent, QuizStatus};
use crate::store::QuizStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Store shared between the session and its timer.
pub type SharedStore = Arc<Mutex<QuizStore>>;

/// Owns a running countdown task. The task is aborted when the handle drops.
#[derive(Debug)]
pub struct TimerHandle {
    run: u64,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// The run this timer was started for.
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Whether the task has stopped on its own.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the countdown now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns countdown tasks on the current tokio runtime.
#[derive(Clone, Debug)]
pub struct TimerDriver {
    period: Duration,
}

impl TimerDriver {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking for run `run` of `store`.
    pub fn spawn(&self, store: SharedStore, run: u64) -> TimerHandle {
        tracing::debug!("Starting countdown for run {} every {:?}", run, self.period);
        let task = tokio::spawn(countdown(store, run, self.period));
        TimerHandle { run, task }
    }
}

async fn countdown(store: SharedStore, run: u64, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;

        let mut store = store.lock().await;
        if store.runs() != run || store.status() != QuizStatus::Active {
            break;
        }
        match store.dispatch(QuizEvent::Tick) {
            Ok(state) if state.status == QuizStatus::Active => {}
            Ok(state) => {
                tracing::debug!("Countdown for run {} ended, quiz is {}", run, state.status);
                break;
            }
            Err(e) => {
                tracing::warn!("Countdown for run {} stopped: {}", run, e);
                break;
            }
        }
    }
}
