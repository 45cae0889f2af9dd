//! Service registry: create_service, change_fee, set_paused, owner checks.
//!
//! **PRs that only change the service catalog should edit this file only.**

use crate::config::bump_instance;
use crate::types::{
    DataKey, Error, FeeChangedEvent, Service, ServiceCreatedEvent, ServicePauseStatusChangedEvent,
    MAX_SERVICE_ID, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_THRESHOLD,
};
use soroban_sdk::{Address, Env, Symbol};

/// Allocate the next service id.
///
/// # Guarantees
/// - The first id is `1`; each call moves the counter forward by exactly `1`.
/// - Ids are never reused.
/// - At [`MAX_SERVICE_ID`] this returns [`Error::ServiceLimitReached`]
///   instead of wrapping.
fn next_id(env: &Env) -> Result<u32, Error> {
    let current: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextServiceId)
        .unwrap_or(0u32);
    if current == MAX_SERVICE_ID {
        return Err(Error::ServiceLimitReached);
    }
    let id = current + 1;
    env.storage().instance().set(&DataKey::NextServiceId, &id);
    Ok(id)
}

pub fn service_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextServiceId)
        .unwrap_or(0u32)
}

/// Load a service. An id that was never created has no record, and so no owner.
pub fn load_service(env: &Env, service_id: u32) -> Result<Service, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Service(service_id))
        .ok_or(Error::ServiceNotExists)
}

pub(crate) fn store_service(env: &Env, service_id: u32, service: &Service) {
    let key = DataKey::Service(service_id);
    env.storage().persistent().set(&key, service);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_LEDGERS);
}

/// Authorize `caller` and load the service, failing unless `caller` owns it.
///
/// Existence is checked before ownership; ownership before any argument
/// validation done by the caller of this helper.
pub fn require_owner(env: &Env, service_id: u32, caller: &Address) -> Result<Service, Error> {
    caller.require_auth();
    let service = load_service(env, service_id)?;
    if service.owner != *caller {
        return Err(Error::NotServiceOwner);
    }
    Ok(service)
}

pub fn do_create_service(
    env: &Env,
    owner: Address,
    fee: i128,
    period_length: u64,
) -> Result<u32, Error> {
    owner.require_auth();
    if fee <= 0 || period_length == 0 {
        return Err(Error::InvalidParameters);
    }

    let id = next_id(env)?;
    let service = Service {
        owner: owner.clone(),
        fee,
        period_length,
        paused: false,
    };
    store_service(env, id, &service);
    bump_instance(env);

    env.events().publish(
        (Symbol::new(env, "service_created"), id),
        ServiceCreatedEvent {
            service_id: id,
            owner,
            fee,
        },
    );
    Ok(id)
}

pub fn do_change_fee(
    env: &Env,
    owner: Address,
    service_id: u32,
    new_fee: i128,
) -> Result<(), Error> {
    let mut service = require_owner(env, service_id, &owner)?;
    if new_fee <= 0 {
        return Err(Error::InvalidParameters);
    }

    let old_fee = service.fee;
    service.fee = new_fee;
    store_service(env, service_id, &service);
    bump_instance(env);

    env.events().publish(
        (Symbol::new(env, "fee_changed"), service_id),
        FeeChangedEvent {
            service_id,
            old_fee,
            new_fee,
        },
    );
    Ok(())
}

pub fn do_set_paused(
    env: &Env,
    owner: Address,
    service_id: u32,
    paused: bool,
) -> Result<(), Error> {
    let mut service = require_owner(env, service_id, &owner)?;
    service.paused = paused;
    store_service(env, service_id, &service);
    bump_instance(env);

    env.events().publish(
        (Symbol::new(env, "pause_status_changed"), service_id),
        ServicePauseStatusChangedEvent { service_id, paused },
    );
    Ok(())
}
