//! Revenue ledger: per-service balances, credit on purchase, owner withdrawal.
//!
//! **PRs that only change owner payouts should edit this file only.**

use crate::config::{bump_instance, get_token};
use crate::registry::require_owner;
use crate::safe_math::safe_credit_balance;
use crate::types::{
    DataKey, Error, RevenueWithdrawnEvent, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_THRESHOLD,
};
use soroban_sdk::{log, token, Address, Env, Symbol};

pub fn get_revenue(env: &Env, service_id: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Revenue(service_id))
        .unwrap_or(0i128)
}

fn store_revenue(env: &Env, service_id: u32, balance: i128) {
    let key = DataKey::Revenue(service_id);
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
}

/// Credit `amount` to a service. Only called from a purchase in the same invocation.
///
/// A credit that does not strictly increase the balance is a bug in the caller,
/// not a user error: it is logged and the whole invocation is rolled back.
pub(crate) fn credit(env: &Env, service_id: u32, amount: i128) -> Result<i128, Error> {
    let balance = get_revenue(env, service_id);
    let updated = match safe_credit_balance(balance, amount) {
        Ok(updated) => updated,
        Err(e) => {
            log!(
                env,
                "revenue credit rejected",
                service_id,
                balance,
                amount
            );
            return Err(e);
        }
    };
    store_revenue(env, service_id, updated);
    Ok(updated)
}

/// Drain a service's revenue to its owner.
///
/// # Ordering
/// The balance is read, zeroed and the event published before the token
/// transfer. A transfer that fails rolls back the zeroing with it; a transfer
/// that somehow re-entered would find nothing left to withdraw.
pub fn do_withdraw_revenue(env: &Env, owner: Address, service_id: u32) -> Result<i128, Error> {
    require_owner(env, service_id, &owner)?;

    let amount = get_revenue(env, service_id);
    if amount == 0 {
        return Err(Error::NoRevenue);
    }
    let token_addr = get_token(env)?;

    store_revenue(env, service_id, 0);
    bump_instance(env);

    env.events().publish(
        (Symbol::new(env, "revenue_withdrawn"), service_id),
        RevenueWithdrawnEvent {
            service_id,
            owner: owner.clone(),
            amount,
        },
    );

    token::TokenClient::new(env, &token_addr).transfer(
        &env.current_contract_address(),
        &owner,
        &amount,
    );
    Ok(amount)
}
