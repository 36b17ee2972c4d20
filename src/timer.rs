// SPDX-License-Identifier: MPL-2.0
//! The scheduling collaborator for auto-dismissal.
//!
//! The manager schedules one deadline per presented toast and identifies it
//! by a [`TimerToken`]. Delivery is message-passing: when the deadline
//! elapses, the timer (or the embedding draining its channel) hands the token
//! back to [`Manager::timer_fired`](crate::Manager::timer_fired). Cancellation
//! is best effort — a stray delivery after the presentation already ended is
//! ignored by the manager, not the timer.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one scheduled dismissal deadline.
///
/// Tokens are minted by the manager; one token is never reused for a later
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Scheduling collaborator for toast auto-dismissal.
pub trait DismissalTimer {
    /// Arranges for `token` to be delivered back to the manager after
    /// `delay`.
    fn schedule_after(&mut self, delay: Duration, token: TimerToken);

    /// Cancels a scheduled delivery. Best effort only.
    fn cancel(&mut self, token: TimerToken);
}

/// [`DismissalTimer`] backed by `tokio::time`.
///
/// Each schedule spawns a sleep task that sends the token over an unbounded
/// channel. The embedding owns the receiving half and forwards every received
/// token to [`Manager::timer_fired`](crate::Manager::timer_fired).
///
/// Requires a tokio runtime to be active when scheduling.
pub struct TokioTimer {
    tx: mpsc::UnboundedSender<TimerToken>,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioTimer {
    /// Creates a timer and the channel the embedding drains fired tokens
    /// from.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                tasks: HashMap::new(),
            },
            rx,
        )
    }
}

impl DismissalTimer for TokioTimer {
    fn schedule_after(&mut self, delay: Duration, token: TimerToken) {
        self.tasks.retain(|_, task| !task.is_finished());

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver may be gone during embedding shutdown.
            let _ = tx.send(token);
        });
        self.tasks.insert(token, task);
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(task) = self.tasks.remove(&token) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_token_after_delay() {
        let (mut timer, mut rx) = TokioTimer::new();
        let token = TimerToken::new(1);

        timer.schedule_after(Duration::from_millis(5), token);

        assert_eq!(rx.recv().await, Some(token));
    }

    #[tokio::test]
    async fn cancel_prevents_delivery() {
        let (mut timer, mut rx) = TokioTimer::new();
        let token = TimerToken::new(2);

        timer.schedule_after(Duration::from_millis(20), token);
        timer.cancel(token);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn independent_tokens_are_delivered_independently() {
        let (mut timer, mut rx) = TokioTimer::new();
        let first = TimerToken::new(3);
        let second = TimerToken::new(4);

        timer.schedule_after(Duration::from_millis(5), first);
        timer.schedule_after(Duration::from_millis(10), second);
        timer.cancel(first);

        assert_eq!(rx.recv().await, Some(second));
    }
}
