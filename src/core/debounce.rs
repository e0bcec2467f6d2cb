//! Last-call-wins debouncing for search input.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Each call cancels the pending timer and starts a new one; only the last
/// action inside a quiet period runs. No queuing.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        // deadline is fixed here, not when the task is first polled
        let timer = tokio::time::sleep(self.delay);
        self.pending = Some(tokio::spawn(async move {
            timer.await;
            action();
        }));
    }

    /// Returns `true` if a pending action was dropped.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Forwards only the last value of each burst from `input`, once `delay`
/// has passed without a newer one. A value still pending when `input`
/// closes is flushed immediately.
pub fn debounce_channel<T>(mut input: mpsc::Receiver<T>, delay: Duration) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut latest: Option<T> = None;
        loop {
            if latest.is_none() {
                match input.recv().await {
                    Some(value) => latest = Some(value),
                    None => break,
                }
                continue;
            }

            tokio::select! {
                next = input.recv() => match next {
                    Some(value) => latest = Some(value),
                    None => {
                        if let Some(value) = latest.take() {
                            let _ = tx.send(value).await;
                        }
                        break;
                    }
                },
                _ = tokio::time::sleep(delay) => {
                    if let Some(value) = latest.take() {
                        if tx.send(value).await.is_err() {
                            break;
                        }
                    }
                }
            }
        }
        tracing::debug!("Debounced input closed");
    });

    rx
}
