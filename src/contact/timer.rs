use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;

/// Pending completion of a contact submission
///
/// Sends `event` on the channel once the delay elapses. Dropping the timer
/// aborts it, so a pending submission never outlives its owner.
#[derive(Debug)]
pub struct SubmissionTimer {
    handle: JoinHandle<()>,
}

impl SubmissionTimer {
    /// Start the delay on the current tokio runtime
    pub fn spawn<T: Send + 'static>(delay: Duration, tx: UnboundedSender<T>, event: T) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!("Submission timer fired");
            let _ = tx.send(event);
        });
        Self { handle }
    }

    /// Stop the timer before it fires
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for SubmissionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let (tx, mut rx) = unbounded_channel();
        let timer = SubmissionTimer::spawn(Duration::from_millis(1000), tx, 7u8);

        tokio::time::advance(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some(7));
        // Sender dropped with the finished task
        assert_eq!(rx.recv().await, None);
        drop(timer);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_event() {
        let (tx, mut rx) = unbounded_channel::<u8>();
        let timer = SubmissionTimer::spawn(Duration::from_millis(1000), tx, 1);

        timer.cancel();

        assert_eq!(rx.recv().await, None);
    }
}
