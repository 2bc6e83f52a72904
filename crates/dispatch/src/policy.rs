//! Priority policy — pure body-composition rules shared by every sender.
//!
//! Every channel sender builds its transmit string through [`compose_body`]
//! rather than each carrying its own formatting, so the priority prefix rules
//! live in exactly one place.

use courier_common::types::Priority;

/// Prefix prepended to a transmitted body for the given priority.
/// Total over the enum; no failure mode.
pub fn priority_prefix(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "URGENT: ",
        Priority::Medium => "Important: ",
        Priority::Low => "",
    }
}

/// The transmit string for one notification:
/// `prefix(priority) + destination + ":" + content`.
pub fn compose_body(priority: Priority, destination: &str, content: &str) -> String {
    format!("{}{}:{}", priority_prefix(priority), destination, content)
}
