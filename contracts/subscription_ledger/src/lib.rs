#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────
mod config;
mod queries;
mod registry;
mod revenue;
mod safe_math;
mod state_machine;
mod subscription;
pub mod types;

// ── Re-exports (used by tests and external consumers) ────────────────────────
pub use state_machine::{apply_purchase, classify, AccessState};
pub use types::*;

use soroban_sdk::{contract, contractimpl, Address, Env};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Permissionless subscription ledger.
///
/// Anyone can register a service with a fee and a billing period. Anyone can
/// buy or gift periods of access to it, paying in the token configured at
/// [`SubscriptionLedger::init`]. Service owners change the fee, pause new
/// purchases and withdraw what their service has collected.
#[contract]
pub struct SubscriptionLedger;

#[contractimpl]
impl SubscriptionLedger {
    // ── Config ───────────────────────────────────────────────────────────

    /// Set the payment token. Can only be called once.
    pub fn init(env: Env, token: Address) -> Result<(), Error> {
        config::do_init(&env, token)
    }

    /// The payment token every purchase and payout uses.
    pub fn token(env: Env) -> Result<Address, Error> {
        config::get_token(&env)
    }

    // ── Service registry ─────────────────────────────────────────────────

    /// Register a service owned by `owner`. Returns its id (first id is `1`).
    ///
    /// # Errors
    /// - [`Error::InvalidParameters`] if `fee <= 0` or `period_length == 0`.
    /// - [`Error::ServiceLimitReached`] once [`MAX_SERVICE_ID`] ids are used.
    pub fn create_service(
        env: Env,
        owner: Address,
        fee: i128,
        period_length: u64,
    ) -> Result<u32, Error> {
        registry::do_create_service(&env, owner, fee, period_length)
    }

    /// Replace the fee of a service. Owner only; the new fee must be positive.
    pub fn change_fee(env: Env, owner: Address, service_id: u32, new_fee: i128) -> Result<(), Error> {
        registry::do_change_fee(&env, owner, service_id, new_fee)
    }

    /// Pause or resume new purchases. Owner only.
    ///
    /// Existing access windows keep running while paused, and the owner can
    /// still change the fee and withdraw revenue.
    pub fn set_paused(env: Env, owner: Address, service_id: u32, paused: bool) -> Result<(), Error> {
        registry::do_set_paused(&env, owner, service_id, paused)
    }

    // ── Subscriptions ────────────────────────────────────────────────────

    /// Buy one period of access for `subscriber`, paying `amount_paid`.
    ///
    /// An active window is extended from its current end; an untouched or
    /// lapsed one restarts from now. Exactly `fee` is kept as revenue and any
    /// excess is refunded to `subscriber`. Returns the new end time.
    ///
    /// # Errors
    /// | Variant | Reason |
    /// |---------|--------|
    /// | `ServiceNotExists` | Service id was never created. |
    /// | `ServicePaused` | Owner has paused new purchases. |
    /// | `InsufficientPayment` | `amount_paid` is below the fee. |
    /// | `NotInitialized` | No payment token configured. |
    pub fn subscribe(
        env: Env,
        subscriber: Address,
        service_id: u32,
        amount_paid: i128,
    ) -> Result<u64, Error> {
        subscription::do_subscribe(&env, subscriber, service_id, amount_paid)
    }

    /// Buy one period of access for `recipient`, paid by `payer`.
    ///
    /// Same rules as [`SubscriptionLedger::subscribe`]; the refund goes to the
    /// payer and the window belongs to the recipient. Fails with
    /// [`Error::InvalidRecipient`] if the recipient is this contract.
    pub fn gift_subscription(
        env: Env,
        payer: Address,
        service_id: u32,
        recipient: Address,
        amount_paid: i128,
    ) -> Result<u64, Error> {
        subscription::do_gift_subscription(&env, payer, service_id, recipient, amount_paid)
    }

    // ── Revenue ──────────────────────────────────────────────────────────

    /// Transfer everything a service has collected to its owner. Returns the amount.
    ///
    /// Fails with [`Error::NoRevenue`] when there is nothing to withdraw.
    pub fn withdraw_revenue(env: Env, owner: Address, service_id: u32) -> Result<i128, Error> {
        revenue::do_withdraw_revenue(&env, owner, service_id)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn get_service(env: Env, service_id: u32) -> Result<Service, Error> {
        queries::get_service(&env, service_id)
    }

    pub fn is_active(env: Env, service_id: u32, subscriber: Address) -> bool {
        queries::is_active(&env, service_id, &subscriber)
    }

    pub fn remaining_end_time(env: Env, service_id: u32, subscriber: Address) -> u64 {
        queries::remaining_end_time(&env, service_id, &subscriber)
    }

    pub fn get_subscription(env: Env, service_id: u32, subscriber: Address) -> Option<Subscription> {
        queries::get_subscription(&env, service_id, &subscriber)
    }

    /// Revenue collected by a service and not yet withdrawn.
    pub fn get_revenue(env: Env, service_id: u32) -> i128 {
        revenue::get_revenue(&env, service_id)
    }

    /// Number of services ever created; also the highest id in use.
    pub fn service_count(env: Env) -> u32 {
        registry::service_count(&env)
    }
}
