//! Access-window state machine for one (service, subscriber) pair.
//!
//! ```text
//!   Untouched --purchase--> Active(now + period)
//!   Active    --purchase--> Active(end_time + period)
//!   Active    --time------> Lapsed              (record kept, `active` stays true)
//!   Lapsed    --purchase--> Active(now + period)
//! ```
//!
//! Every transition goes through a purchase; nothing expires a record
//! in storage and there is no terminal state.

use crate::types::{Error, Subscription};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessState {
    /// No record for this pair.
    Untouched,
    /// `active && end_time > now`.
    Active,
    /// Record present but the window no longer covers `now`.
    Lapsed,
}

/// Classify a stored record at ledger time `now`.
///
/// The boundary is exclusive: `end_time == now` is already lapsed.
pub fn classify(record: Option<&Subscription>, now: u64) -> AccessState {
    match record {
        None => AccessState::Untouched,
        Some(sub) if sub.active && sub.end_time > now => AccessState::Active,
        Some(_) => AccessState::Lapsed,
    }
}

pub fn is_active_at(record: Option<&Subscription>, now: u64) -> bool {
    classify(record, now) == AccessState::Active
}

/// Record produced by one paid period.
///
/// Active windows stack on their remaining time; untouched and lapsed ones
/// restart from `now`, discarding any lapsed remainder.
pub fn apply_purchase(
    record: Option<&Subscription>,
    now: u64,
    period_length: u64,
) -> Result<Subscription, Error> {
    let base = match (classify(record, now), record) {
        (AccessState::Active, Some(sub)) => sub.end_time,
        _ => now,
    };
    let end_time = base.checked_add(period_length).ok_or(Error::Overflow)?;
    Ok(Subscription {
        end_time,
        active: true,
    })
}
