//! Countdown timer gating the resend action.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// A countdown in whole seconds, driven by an owned timer task.
///
/// The task decrements the published value once per elapsed second until it
/// reaches zero, then exits. The task is tied to this handle's lifetime:
/// dropping the countdown (or calling [`stop`](Self::stop)) aborts it, so
/// no tick ever fires after the owner is gone.
#[derive(Debug)]
pub struct Countdown {
    seconds: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Start a countdown from the given number of seconds.
    pub fn start(seconds: u64) -> Self {
        let (tx, rx) = watch::channel(seconds);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; consume it so the
            // published value holds for a full second.
            interval.tick().await;

            loop {
                if *tx.borrow() == 0 {
                    break;
                }
                interval.tick().await;
                let next = tx.borrow().saturating_sub(1);
                if tx.send(next).is_err() {
                    break;
                }
            }
            debug!("countdown elapsed");
        });

        Self { seconds: rx, task }
    }

    /// The remaining seconds.
    pub fn seconds(&self) -> u64 {
        *self.seconds.borrow()
    }

    /// True once the countdown has reached zero.
    pub fn is_elapsed(&self) -> bool {
        self.seconds() == 0
    }

    /// A receiver that observes every decrement.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.seconds.clone()
    }

    /// Stop the timer task without waiting for it to elapse.
    pub fn stop(&self) {
        self.task.abort();
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

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_once_per_second_to_zero() {
        let countdown = Countdown::start(3);
        assert_eq!(countdown.seconds(), 3);
        assert!(!countdown.is_elapsed());

        let mut rx = countdown.subscribe();
        for expected in [2, 1, 0] {
            rx.changed().await.unwrap();
            assert_eq!(*rx.borrow(), expected);
        }

        assert!(countdown.is_elapsed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_does_not_tick_below_zero() {
        let countdown = Countdown::start(1);
        let mut rx = countdown.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(countdown.seconds(), 0);

        // Give the (now finished) task room to misbehave
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(countdown.seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_starting_at_zero_is_immediately_elapsed() {
        let countdown = Countdown::start(0);
        assert!(countdown.is_elapsed());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(countdown.seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticking() {
        let countdown = Countdown::start(30);
        countdown.stop();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(countdown.seconds(), 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_the_task() {
        let countdown = Countdown::start(30);
        let mut rx = countdown.subscribe();
        drop(countdown);

        // The sender side is gone once the task is aborted
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.changed().await.is_err());
    }
}
