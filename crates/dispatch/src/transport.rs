//! Transport capability — the narrow contract the core depends on.
//!
//! One implementation per channel wires the dispatch core to a real delivery
//! backend (SMTP, SMS gateway, APNs/FCM). None of that integration lives in
//! this crate; senders receive a `Transport` at construction and call nothing
//! else.

use async_trait::async_trait;

use courier_common::error::TransportError;

/// A delivery backend for one channel.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver `body` to `destination`. Exactly one delivery attempt per call;
    /// retries are the dispatcher's concern.
    async fn transmit(&self, destination: &str, body: &str) -> Result<(), TransportError>;
}
