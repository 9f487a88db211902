//! The one-second countdown that drives a running word game.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use uuid::Uuid;

/// Default spacing between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A tick delivered to the host, addressed to one game run.
///
/// `generation` identifies the run that scheduled it; a restarted game bumps
/// its generation so ticks from the old run are recognisably stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    pub session_id: Uuid,
    pub generation: u64,
}

/// Handle to a running countdown task.
///
/// Dropping the handle aborts the task, so at most one countdown exists per
/// handle and none outlives its owner.
#[derive(Debug)]
pub struct Countdown {
    generation: u64,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Spawns a task that sends a tick every `period`, first after one period.
    ///
    /// The task ends on its own once the receiving side is gone.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn start(
        session_id: Uuid,
        generation: u64,
        period: Duration,
        ticks: UnboundedSender<CountdownTick>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let tick = CountdownTick {
                    session_id,
                    generation,
                };
                if ticks.send(tick).is_err() {
                    break;
                }
            }
        });
        Self { generation, task }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_once_per_period() {
        // Arrange
        let (tx, mut rx) = mpsc::unbounded_channel();
        let session_id = Uuid::new_v4();
        let start = Instant::now();

        // Act
        let countdown = Countdown::start(session_id, 3, TICK_PERIOD, tx);
        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();

        // Assert
        assert_eq!(
            first,
            CountdownTick {
                session_id,
                generation: 3
            }
        );
        assert_eq!(second, first);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(countdown.generation(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_countdown_stops_ticks() {
        // Arrange
        let (tx, mut rx) = mpsc::unbounded_channel();
        let countdown = Countdown::start(Uuid::new_v4(), 1, TICK_PERIOD, tx);
        rx.recv().await.unwrap();

        // Act
        drop(countdown);

        // Assert: the aborted task drops the only sender.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ends_when_receiver_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        let countdown = Countdown::start(Uuid::new_v4(), 1, TICK_PERIOD, tx);

        drop(rx);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(countdown.task.is_finished());
    }
}
