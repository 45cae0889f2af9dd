//! Subscription tracker: subscribe, gift_subscription and the shared purchase path.
//!
//! **PRs that only change how access windows are bought should edit this file only.**

use crate::config::{bump_instance, get_token};
use crate::registry::load_service;
use crate::revenue;
use crate::safe_math::safe_overpayment;
use crate::state_machine::apply_purchase;
use crate::types::{
    DataKey, Error, Subscription, SubscriptionPurchasedEvent, PERSISTENT_BUMP_LEDGERS,
    PERSISTENT_BUMP_THRESHOLD,
};
use soroban_sdk::{token, Address, Env, Symbol};

pub fn load_subscription(env: &Env, service_id: u32, subscriber: &Address) -> Option<Subscription> {
    env.storage()
        .persistent()
        .get(&DataKey::Subscription(service_id, subscriber.clone()))
}

fn store_subscription(env: &Env, service_id: u32, subscriber: &Address, sub: &Subscription) {
    let key = DataKey::Subscription(service_id, subscriber.clone());
    env.storage().persistent().set(&key, sub);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
}

pub fn do_subscribe(
    env: &Env,
    subscriber: Address,
    service_id: u32,
    amount_paid: i128,
) -> Result<u64, Error> {
    subscriber.require_auth();
    purchase(env, service_id, &subscriber, &subscriber, amount_paid)
}

pub fn do_gift_subscription(
    env: &Env,
    payer: Address,
    service_id: u32,
    recipient: Address,
    amount_paid: i128,
) -> Result<u64, Error> {
    payer.require_auth();
    if recipient == env.current_contract_address() {
        return Err(Error::InvalidRecipient);
    }
    purchase(env, service_id, &payer, &recipient, amount_paid)
}

/// Buy one period of access to `service_id` for `beneficiary`, paid by `payer`.
///
/// # Steps
/// 1. Reject absent or paused services and payments below the fee.
/// 2. Pull `amount_paid` from the payer.
/// 3. Extend (active) or restart (untouched / lapsed) the beneficiary's window.
/// 4. Credit exactly `fee` to the service revenue.
/// 5. Publish `subscription_purchased`.
/// 6. Refund `amount_paid - fee` to the payer, if any.
///
/// The refund is the only outward transfer and always comes last.
fn purchase(
    env: &Env,
    service_id: u32,
    payer: &Address,
    beneficiary: &Address,
    amount_paid: i128,
) -> Result<u64, Error> {
    let service = load_service(env, service_id)?;
    if service.paused {
        return Err(Error::ServicePaused);
    }
    if amount_paid < service.fee {
        return Err(Error::InsufficientPayment);
    }
    let refund = safe_overpayment(amount_paid, service.fee)?;
    let token_addr = get_token(env)?;

    let now = env.ledger().timestamp();
    let current = load_subscription(env, service_id, beneficiary);
    let updated = apply_purchase(current.as_ref(), now, service.period_length)?;

    let ledger = env.current_contract_address();
    let token_client = token::TokenClient::new(env, &token_addr);
    token_client.transfer(payer, &ledger, &amount_paid);

    store_subscription(env, service_id, beneficiary, &updated);
    revenue::credit(env, service_id, service.fee)?;
    bump_instance(env);

    env.events().publish(
        (Symbol::new(env, "subscription_purchased"), service_id),
        SubscriptionPurchasedEvent {
            service_id,
            beneficiary: beneficiary.clone(),
            end_time: updated.end_time,
        },
    );

    if refund > 0 {
        token_client.transfer(&ledger, payer, &refund);
    }
    Ok(updated.end_time)
}
