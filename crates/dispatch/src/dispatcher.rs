//! Dispatcher — fans a batch of notifications out across independent send
//! tasks and collects one outcome per notification, in input order.
//!
//! For each notification:
//! 1. Select the sender for its channel tag through the registry
//! 2. Run the send under the per-attempt timeout, retrying per the policy
//! 3. Fold timeout, cancellation, and transport failure into the outcome
//!
//! The batch call never fails outright; partial failure is expressed per item.
//! The dispatcher holds no state between calls and is safely reentrant.

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use tokio_util::sync::CancellationToken;

use courier_common::config::DispatchConfig;
use courier_common::types::{FailureReason, Notification, Outcome};

use crate::retry::RetryPolicy;
use crate::sender::SenderRegistry;

/// Stateless batch dispatcher over a sender registry.
pub struct Dispatcher {
    senders: Arc<SenderRegistry>,
    retry: RetryPolicy,
    send_timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher with the given registry and configuration.
    pub fn new(senders: Arc<SenderRegistry>, config: &DispatchConfig) -> Self {
        Self {
            senders,
            retry: RetryPolicy::from(config),
            send_timeout: config.send_timeout(),
        }
    }

    /// Dispatch a batch without a cancellation signal.
    pub async fn dispatch_all(&self, notifications: Vec<Notification>) -> Vec<Outcome> {
        self.dispatch_all_with_cancel(notifications, CancellationToken::new())
            .await
    }

    /// Dispatch a batch, one task per notification.
    ///
    /// Returns exactly one outcome per input notification, in input order
    /// regardless of completion order. On cancellation, in-flight transmits
    /// complete but no new attempts start; not-yet-started items report
    /// `FailureReason::Cancelled`.
    pub async fn dispatch_all_with_cancel(
        &self,
        notifications: Vec<Notification>,
        cancel: CancellationToken,
    ) -> Vec<Outcome> {
        let total = notifications.len();
        tracing::debug!(total, "Dispatching notification batch");

        // Each task owns its notification outright; the channel/destination
        // pair is kept on the side to label a panicked task's outcome.
        let handles: Vec<_> = notifications
            .into_iter()
            .map(|notification| {
                let label = (notification.channel(), notification.destination().to_string());
                let senders = Arc::clone(&self.senders);
                let retry = self.retry.clone();
                let send_timeout = self.send_timeout;
                let cancel = cancel.clone();
                let handle = tokio::spawn(async move {
                    send_with_retry(&senders, &retry, send_timeout, &cancel, &notification).await
                });
                (label, handle)
            })
            .collect();

        // join_all preserves the order the handles were created in, which is
        // the input order, independent of completion order.
        let results = future::join_all(handles.into_iter().map(|(label, handle)| async move {
            match handle.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    let (channel, destination) = label;
                    tracing::error!(
                        channel = %channel,
                        destination = %destination,
                        error = %err,
                        "Send task aborted"
                    );
                    Outcome::failed(
                        channel,
                        destination,
                        FailureReason::Transport(format!("send task aborted: {err}")),
                    )
                }
            }
        }))
        .await;

        let sent = results.iter().filter(|o| o.is_sent()).count();
        tracing::info!(total, sent, failed = total - sent, "Batch dispatched");
        results
    }
}

/// Run one notification through the retry loop.
async fn send_with_retry(
    senders: &SenderRegistry,
    retry: &RetryPolicy,
    send_timeout: Option<Duration>,
    cancel: &CancellationToken,
    notification: &Notification,
) -> Outcome {
    let channel = notification.channel();
    let destination = notification.destination();
    let sender = senders.sender_for(channel);

    for attempt in 0..retry.max_attempts {
        // Checked before every attempt: once cancelled, no new sends start,
        // but an attempt already inside `send` runs to completion.
        if cancel.is_cancelled() {
            tracing::debug!(
                channel = %channel,
                destination = %destination,
                "Skipping send, batch cancelled"
            );
            return Outcome::failed(channel, destination, FailureReason::Cancelled);
        }

        let outcome = match send_timeout {
            Some(limit) => match tokio::time::timeout(limit, sender.send(notification)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(
                        channel = %channel,
                        destination = %destination,
                        timeout_ms = limit.as_millis() as u64,
                        "Send attempt timed out"
                    );
                    Outcome::failed(channel, destination, FailureReason::Timeout)
                }
            },
            None => sender.send(notification).await,
        };

        if outcome.is_sent() || attempt + 1 >= retry.max_attempts {
            return outcome;
        }

        let delay = retry.delay_for_attempt(attempt);
        tracing::warn!(
            channel = %channel,
            destination = %destination,
            attempt = attempt + 1,
            max_attempts = retry.max_attempts,
            delay_ms = delay.as_millis() as u64,
            "Send failed, retrying"
        );
        tokio::select! {
            _ = cancel.cancelled() => {
                return Outcome::failed(channel, destination, FailureReason::Cancelled);
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }

    // Unreachable: max_attempts is clamped to at least 1 and the final
    // iteration always returns.
    Outcome::failed(
        channel,
        destination,
        FailureReason::Transport("retry loop exited without result".to_string()),
    )
}
