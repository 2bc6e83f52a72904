use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// Classification of a message's purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Promotion,
    Reminder,
    Alert,
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageCategory::Promotion => write!(f, "promotion"),
            MessageCategory::Reminder => write!(f, "reminder"),
            MessageCategory::Alert => write!(f, "alert"),
        }
    }
}

/// Message priority. Declaration order carries the total order
/// Low < Medium < High, used for display purposes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Notification channel tag. Stored explicitly on every notification so the
/// dispatcher selects a sender by matching on this value, never by runtime
/// type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Email => write!(f, "email"),
            ChannelKind::Sms => write!(f, "sms"),
            ChannelKind::Push => write!(f, "push"),
        }
    }
}

/// Immutable message value: a category plus non-empty content. Owned (copied,
/// not shared) by whichever notification holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    category: MessageCategory,
    content: String,
}

impl Message {
    /// Construct a message. Fails if `content` is empty.
    pub fn new(
        category: MessageCategory,
        content: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let content = content.into();
        if content.is_empty() {
            return Err(ConstructionError::EmptyContent);
        }
        Ok(Self { category, content })
    }

    pub fn category(&self) -> MessageCategory {
        self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An email-addressed notification. The address must contain `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailNotification {
    message: Message,
    priority: Priority,
    address: String,
}

impl EmailNotification {
    pub fn new(
        message: Message,
        priority: Priority,
        address: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let address = address.into();
        if address.is_empty() || !address.contains('@') {
            return Err(ConstructionError::InvalidEmailAddress { address });
        }
        Ok(Self {
            message,
            priority,
            address,
        })
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// An SMS-addressed notification. The phone number is non-empty and limited
/// to digits and `+`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsNotification {
    message: Message,
    priority: Priority,
    phone_number: String,
}

impl SmsNotification {
    pub fn new(
        message: Message,
        priority: Priority,
        phone_number: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let phone_number = phone_number.into();
        if phone_number.is_empty()
            || !phone_number.chars().all(|c| c.is_ascii_digit() || c == '+')
        {
            return Err(ConstructionError::InvalidPhoneNumber { phone_number });
        }
        Ok(Self {
            message,
            priority,
            phone_number,
        })
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

/// A push-addressed notification. The device token must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    message: Message,
    priority: Priority,
    device_token: String,
}

impl PushNotification {
    pub fn new(
        message: Message,
        priority: Priority,
        device_token: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let device_token = device_token.into();
        if device_token.is_empty() {
            return Err(ConstructionError::EmptyDeviceToken);
        }
        Ok(Self {
            message,
            priority,
            device_token,
        })
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn device_token(&self) -> &str {
        &self.device_token
    }
}

/// A message bound to a destination and priority for one channel.
///
/// Construction goes through the per-variant constructors (or the `email` /
/// `sms` / `push` shortcuts), which validate the destination; values are
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum Notification {
    Email(EmailNotification),
    Sms(SmsNotification),
    Push(PushNotification),
}

impl Notification {
    /// Shortcut for a validated email notification.
    pub fn email(
        message: Message,
        priority: Priority,
        address: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self::Email(EmailNotification::new(message, priority, address)?))
    }

    /// Shortcut for a validated SMS notification.
    pub fn sms(
        message: Message,
        priority: Priority,
        phone_number: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self::Sms(SmsNotification::new(message, priority, phone_number)?))
    }

    /// Shortcut for a validated push notification.
    pub fn push(
        message: Message,
        priority: Priority,
        device_token: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self::Push(PushNotification::new(message, priority, device_token)?))
    }

    /// The channel tag of this notification's variant.
    pub fn channel(&self) -> ChannelKind {
        match self {
            Notification::Email(_) => ChannelKind::Email,
            Notification::Sms(_) => ChannelKind::Sms,
            Notification::Push(_) => ChannelKind::Push,
        }
    }

    pub fn message(&self) -> &Message {
        match self {
            Notification::Email(n) => n.message(),
            Notification::Sms(n) => n.message(),
            Notification::Push(n) => n.message(),
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Notification::Email(n) => n.priority(),
            Notification::Sms(n) => n.priority(),
            Notification::Push(n) => n.priority(),
        }
    }

    /// The validated destination string for this notification's channel.
    pub fn destination(&self) -> &str {
        match self {
            Notification::Email(n) => n.address(),
            Notification::Sms(n) => n.phone_number(),
            Notification::Push(n) => n.device_token(),
        }
    }
}

/// Why a dispatch attempt failed. Cancellation and timeout are distinguishable
/// from an opaque transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureReason {
    Transport(String),
    Timeout,
    Cancelled,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Transport(reason) => write!(f, "{}", reason),
            FailureReason::Timeout => write!(f, "timeout"),
            FailureReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Delivery status of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed { reason: FailureReason },
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Sent => write!(f, "sent"),
            DeliveryStatus::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Per-notification result of a dispatch attempt. Produced by the dispatcher,
/// consumed by the caller, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: DeliveryStatus,
    pub channel: ChannelKind,
    pub destination: String,
}

impl Outcome {
    pub fn sent(channel: ChannelKind, destination: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Sent,
            channel,
            destination: destination.into(),
        }
    }

    pub fn failed(
        channel: ChannelKind,
        destination: impl Into<String>,
        reason: FailureReason,
    ) -> Self {
        Self {
            status: DeliveryStatus::Failed { reason },
            channel,
            destination: destination.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.status, DeliveryStatus::Sent)
    }

    pub fn is_failed(&self) -> bool {
        !self.is_sent()
    }

    /// The failure reason, if this outcome is a failure.
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match &self.status {
            DeliveryStatus::Sent => None,
            DeliveryStatus::Failed { reason } => Some(reason),
        }
    }
}
