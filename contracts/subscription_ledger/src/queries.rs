//! Read-only views. None of these write storage or publish events.

use crate::registry::load_service;
use crate::state_machine::is_active_at;
use crate::subscription::load_subscription;
use crate::types::{Error, Service, Subscription};
use soroban_sdk::{Address, Env};

pub fn get_service(env: &Env, service_id: u32) -> Result<Service, Error> {
    load_service(env, service_id)
}

/// Raw stored record, including a stale `active` flag on lapsed windows.
pub fn get_subscription(env: &Env, service_id: u32, subscriber: &Address) -> Option<Subscription> {
    load_subscription(env, service_id, subscriber)
}

/// `active && end_time > now`. Unknown services and subscribers are simply inactive.
pub fn is_active(env: &Env, service_id: u32, subscriber: &Address) -> bool {
    let record = load_subscription(env, service_id, subscriber);
    is_active_at(record.as_ref(), env.ledger().timestamp())
}

/// End of the current access window, or `0` when not active.
///
/// A lapsed record's old `end_time` is hidden.
pub fn remaining_end_time(env: &Env, service_id: u32, subscriber: &Address) -> u64 {
    let now = env.ledger().timestamp();
    match load_subscription(env, service_id, subscriber) {
        Some(sub) if is_active_at(Some(&sub), now) => sub.end_time,
        _ => 0,
    }
}
