use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use wellpath_core::models::chat::ChatMessage;

use crate::source::MessageSource;

/// Refresh cadence for an open referral conversation.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Owner's side of a running poller.
///
/// The caller cancels when the conversation leaves the screen. Dropping
/// the handle cancels too, so a forgotten handle never leaks the task.
pub struct PollHandle {
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
    messages: watch::Receiver<Vec<ChatMessage>>,
}

impl PollHandle {
    /// Receiver that observes every replacement of the message list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ChatMessage>> {
        self.messages.clone()
    }

    /// Last successfully fetched list. Empty until the first fetch lands.
    pub fn latest(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    pub fn cancel(&self) {
        self.shutdown.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Cancel and wait for the task to wind down.
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            warn!(error = %e, "chat poller task did not shut down cleanly");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Fetch the conversation now and then every `interval` until cancelled.
///
/// Each successful fetch replaces the published list wholesale. A failed
/// fetch is logged and the previous list stays visible; the next tick tries
/// again. Must be called from within a tokio runtime.
pub fn spawn_poller<S>(source: Arc<S>, referral_id: u64, interval: Duration) -> PollHandle
where
    S: MessageSource + ?Sized + 'static,
{
    let shutdown = CancellationToken::new();
    let (tx, rx) = watch::channel(Vec::new());

    let token = shutdown.clone();
    let task = tokio::spawn(async move {
        info!(referral = referral_id, interval_ms = interval.as_millis() as u64, "chat poller started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                _ = token.cancelled() => break,
                result = source.fetch_messages(referral_id) => result,
            };

            match result {
                Ok(messages) => {
                    let count = messages.len();
                    let changed = tx.send_if_modified(|current| {
                        if *current == messages {
                            return false;
                        }
                        *current = messages;
                        true
                    });
                    debug!(referral = referral_id, count, changed, "chat refreshed");
                }
                Err(e) => {
                    warn!(referral = referral_id, error = %e, "chat refresh failed");
                }
            }
        }

        info!(referral = referral_id, "chat poller stopped");
    });

    PollHandle {
        shutdown,
        task: Some(task),
        messages: rx,
    }
}
