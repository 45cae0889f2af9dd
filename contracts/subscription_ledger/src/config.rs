//! Config: init, payment token, instance TTL.
//!
//! **PRs that only change deployment configuration should edit this file only.**

use crate::types::{DataKey, Error, INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn do_init(env: &Env, token: Address) -> Result<(), Error> {
    if env.storage().instance().has(&DataKey::Token) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&DataKey::Token, &token);
    bump_instance(env);
    Ok(())
}

/// Payment token address. Every token movement goes through this.
pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_LEDGERS);
}
