//! Channel senders and the registry that routes notifications to them.
//!
//! Each sender owns an injected [`Transport`] for its channel, composes the
//! transmit body through the shared priority policy, and maps the transport
//! result into an [`Outcome`]. Failures are captured in the outcome; nothing
//! escapes the `send` boundary.

use std::sync::Arc;

use async_trait::async_trait;

use courier_common::types::{ChannelKind, FailureReason, Notification, Outcome};

use crate::policy::compose_body;
use crate::transport::Transport;

/// The capability every channel implementation provides: send one
/// notification, produce one outcome.
#[async_trait]
pub trait Sendable: Send + Sync {
    /// The channel this sender handles.
    fn channel(&self) -> ChannelKind;

    /// Format and transmit one notification. Exactly one transport call per
    /// invocation; no retries here (retries belong to the dispatcher).
    ///
    /// The destination was validated at construction and is not re-checked.
    async fn send(&self, notification: &Notification) -> Outcome;
}

/// Shared send path: compose the body, invoke the transport, fold the result
/// into an outcome.
async fn transmit_one(
    channel: ChannelKind,
    transport: &dyn Transport,
    notification: &Notification,
) -> Outcome {
    let destination = notification.destination();
    let body = compose_body(
        notification.priority(),
        destination,
        notification.message().content(),
    );

    tracing::debug!(
        channel = %channel,
        destination = %destination,
        priority = %notification.priority(),
        "Transmitting notification"
    );

    match transport.transmit(destination, &body).await {
        Ok(()) => {
            tracing::info!(channel = %channel, destination = %destination, "Notification sent");
            Outcome::sent(channel, destination)
        }
        Err(err) => {
            tracing::warn!(
                channel = %channel,
                destination = %destination,
                error = %err,
                "Transport failed"
            );
            Outcome::failed(
                channel,
                destination,
                FailureReason::Transport(err.reason().to_string()),
            )
        }
    }
}

/// Email channel sender.
pub struct EmailSender {
    transport: Arc<dyn Transport>,
}

impl EmailSender {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl Sendable for EmailSender {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Email
    }

    async fn send(&self, notification: &Notification) -> Outcome {
        transmit_one(ChannelKind::Email, self.transport.as_ref(), notification).await
    }
}

/// SMS channel sender.
pub struct SmsSender {
    transport: Arc<dyn Transport>,
}

impl SmsSender {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl Sendable for SmsSender {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Sms
    }

    async fn send(&self, notification: &Notification) -> Outcome {
        transmit_one(ChannelKind::Sms, self.transport.as_ref(), notification).await
    }
}

/// Push channel sender.
pub struct PushSender {
    transport: Arc<dyn Transport>,
}

impl PushSender {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl Sendable for PushSender {
    fn channel(&self) -> ChannelKind {
        ChannelKind::Push
    }

    async fn send(&self, notification: &Notification) -> Outcome {
        transmit_one(ChannelKind::Push, self.transport.as_ref(), notification).await
    }
}

/// Static dispatch table: one sender per channel, selected by matching on the
/// notification's channel tag.
pub struct SenderRegistry {
    email: EmailSender,
    sms: SmsSender,
    push: PushSender,
}

impl SenderRegistry {
    /// Create a registry with one transport per channel.
    pub fn new(
        email: Arc<dyn Transport>,
        sms: Arc<dyn Transport>,
        push: Arc<dyn Transport>,
    ) -> Self {
        Self {
            email: EmailSender::new(email),
            sms: SmsSender::new(sms),
            push: PushSender::new(push),
        }
    }

    /// Create a registry wiring a single transport into all three channels.
    /// Useful when one gateway multiplexes every channel, and in tests.
    pub fn shared(transport: Arc<dyn Transport>) -> Self {
        Self::new(transport.clone(), transport.clone(), transport)
    }

    /// Select the sender for a channel.
    pub fn sender_for(&self, channel: ChannelKind) -> &dyn Sendable {
        match channel {
            ChannelKind::Email => &self.email,
            ChannelKind::Sms => &self.sms,
            ChannelKind::Push => &self.push,
        }
    }
}
