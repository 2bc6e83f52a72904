//! Channel filter — order-preserving selection by channel tag.

use courier_common::types::{ChannelKind, Notification};

/// Select the notifications of one channel, preserving relative input order.
/// Pure and total: an input with no matches yields an empty vector.
/// Results are clones, so the input collection is left untouched.
pub fn filter_by_channel(notifications: &[Notification], channel: ChannelKind) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| n.channel() == channel)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use courier_common::types::{Message, MessageCategory, Priority};

    fn mixed_batch() -> Vec<Notification> {
        let msg = |content: &str| Message::new(MessageCategory::Reminder, content).unwrap();
        vec![
            Notification::email(msg("first"), Priority::Low, "a@b.com").unwrap(),
            Notification::sms(msg("second"), Priority::Low, "+1555").unwrap(),
            Notification::email(msg("third"), Priority::Low, "c@d.com").unwrap(),
            Notification::push(msg("fourth"), Priority::Low, "tok-1").unwrap(),
        ]
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let batch = mixed_batch();
        let emails = filter_by_channel(&batch, ChannelKind::Email);
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].destination(), "a@b.com");
        assert_eq!(emails[1].destination(), "c@d.com");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let batch = mixed_batch();
        let once = filter_by_channel(&batch, ChannelKind::Email);
        let twice = filter_by_channel(&once, ChannelKind::Email);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let batch = vec![mixed_batch().remove(1)];
        assert!(filter_by_channel(&batch, ChannelKind::Push).is_empty());
        assert!(filter_by_channel(&[], ChannelKind::Email).is_empty());
    }
}
