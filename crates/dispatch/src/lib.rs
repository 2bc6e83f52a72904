//! Notification dispatch core.
//!
//! Routes each notification to the sender for its channel, applies the
//! priority prefix policy to the transmitted body, and reports one outcome
//! per notification:
//!
//! 1. The caller builds validated [`Notification`](courier_common::types::Notification)
//!    values (see `courier-common`).
//! 2. [`Dispatcher::dispatch_all`](dispatcher::Dispatcher) fans the batch out
//!    across independent tasks, one per notification.
//! 3. Each task selects its sender through the [`SenderRegistry`](sender::SenderRegistry)
//!    and runs the retry/timeout loop around `send`.
//! 4. Outcomes come back in input order; per-item failure never aborts the batch.
//!
//! The network side (SMTP, SMS gateway, APNs/FCM) lives behind the injected
//! [`Transport`](transport::Transport) capability and is outside this crate.

pub mod dispatcher;
pub mod filter;
pub mod policy;
pub mod retry;
pub mod sender;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use filter::filter_by_channel;
pub use retry::RetryPolicy;
pub use sender::{EmailSender, PushSender, Sendable, SenderRegistry, SmsSender};
pub use transport::Transport;
