//! Per-question countdown running as an auxiliary task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

/// Notification sent from a countdown task to the session loop.
///
/// Every event carries the index of the question the timer was started for,
/// so the loop can discard events from a timer that has since been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { question: usize, remaining: u32 },
    Expired { question: usize },
}

impl TimerEvent {
    #[must_use]
    pub fn question(&self) -> usize {
        match self {
            TimerEvent::Tick { question, .. } | TimerEvent::Expired { question } => *question,
        }
    }
}

/// Handle to a running countdown.
///
/// Sends one `Tick` per time unit from `units` down to 0, then `Expired` one
/// unit later. After `cancel` returns the task has terminated and sends nothing
/// more. Dropping the handle also stops the countdown, without waiting.
pub struct CountdownTimer {
    question: usize,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Spawn a countdown for `question` on the current tokio runtime.
    #[must_use]
    pub fn start(
        question: usize,
        units: u32,
        unit: Duration,
        events: UnboundedSender<TimerEvent>,
    ) -> Self {
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_countdown(question, units, unit, events, token.clone()));
        Self {
            question,
            token,
            handle,
        }
    }

    /// Stop the countdown and wait for its task to terminate.
    ///
    /// Cancelling a timer that already expired is a no-op.
    pub async fn cancel(mut self) {
        self.token.cancel();
        if let Err(err) = (&mut self.handle).await
            && err.is_panic()
        {
            warn!(question = self.question, "countdown task panicked");
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run_countdown(
    question: usize,
    units: u32,
    unit: Duration,
    events: UnboundedSender<TimerEvent>,
    token: CancellationToken,
) {
    for remaining in (0..=units).rev() {
        if token.is_cancelled() {
            return;
        }
        if events
            .send(TimerEvent::Tick {
                question,
                remaining,
            })
            .is_err()
        {
            return;
        }

        tokio::select! {
            biased;
            () = token.cancelled() => {
                trace!(question, remaining, "countdown cancelled");
                return;
            }
            () = tokio::time::sleep(unit) => {}
        }
    }

    if !token.is_cancelled() {
        trace!(question, "countdown expired");
        let _ = events.send(TimerEvent::Expired { question });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    const UNIT: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn ticks_count_down_to_zero_then_expire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        let _timer = CountdownTimer::start(7, 3, UNIT, tx);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
            if matches!(event, TimerEvent::Expired { .. }) {
                break;
            }
        }

        assert_eq!(
            events,
            vec![
                TimerEvent::Tick {
                    question: 7,
                    remaining: 3
                },
                TimerEvent::Tick {
                    question: 7,
                    remaining: 2
                },
                TimerEvent::Tick {
                    question: 7,
                    remaining: 1
                },
                TimerEvent::Tick {
                    question: 7,
                    remaining: 0
                },
                TimerEvent::Expired { question: 7 },
            ]
        );
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(4), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_sends_nothing_more() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(0, 30, UNIT, tx);

        let first = rx.recv().await;
        assert_eq!(
            first,
            Some(TimerEvent::Tick {
                question: 0,
                remaining: 30
            })
        );

        timer.cancel().await;
        tokio::time::sleep(Duration::from_secs(60)).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelling_an_expired_timer_is_harmless() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(2, 0, UNIT, tx);

        assert_eq!(
            rx.recv().await,
            Some(TimerEvent::Tick {
                question: 2,
                remaining: 0
            })
        );
        assert_eq!(rx.recv().await, Some(TimerEvent::Expired { question: 2 }));

        timer.cancel().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err(), "no second expiry");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_countdown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(1, 10, UNIT, tx);
        assert!(rx.recv().await.is_some());

        drop(timer);
        tokio::time::sleep(Duration::from_secs(30)).await;

        let mut expired = false;
        while let Ok(event) = rx.try_recv() {
            expired |= matches!(event, TimerEvent::Expired { .. });
        }
        assert!(!expired);
    }
}
