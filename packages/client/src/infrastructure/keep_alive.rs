//! Periodic keep-alive task.

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::config::MIN_KEEP_ALIVE_INTERVAL;

/// A background timer that calls `on_tick` every `period`.
///
/// The first tick fires one full period after spawning. The timer stops when
/// `on_tick` returns `false`, when [`KeepAlive::cancel`] is called, or when the
/// value is dropped. Cancelling is idempotent. A `period` shorter than
/// [`MIN_KEEP_ALIVE_INTERVAL`] is raised to it.
#[derive(Debug)]
pub struct KeepAlive {
    handle: Option<JoinHandle<()>>,
}

impl KeepAlive {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let period = period.max(MIN_KEEP_ALIVE_INTERVAL);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for KeepAlive {
    fn drop(&mut self) {
        self.cancel();
    }
}
