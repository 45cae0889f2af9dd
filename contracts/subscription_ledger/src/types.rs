use soroban_sdk::{contracterror, contracttype, Address};

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
/// Bumped on every write so service, subscription and revenue data never expire.
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Remaining TTL below which an entry is bumped back to [`PERSISTENT_BUMP_LEDGERS`].
pub const PERSISTENT_BUMP_THRESHOLD: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;

/// Instance storage TTL (config + id counter).
pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_BUMP_THRESHOLD: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

/// Highest service id the registry will ever allocate.
///
/// The counter is a `u32`; once it reaches this value
/// [`crate::SubscriptionLedger::create_service`] returns
/// [`Error::ServiceLimitReached`] instead of wrapping.
pub const MAX_SERVICE_ID: u32 = u32::MAX;

/// Storage keys.
///
/// Instance: `Token`, `NextServiceId`.
/// Persistent: one entry per service, per (service, subscriber) pair and per
/// service revenue balance.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Payment token (SEP-41) used for every purchase and payout.
    Token,
    /// Number of services created so far; also the last id handed out.
    NextServiceId,
    Service(u32),
    Subscription(u32, Address),
    Revenue(u32),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Zero or negative fee, or zero period length.
    InvalidParameters = 400,
    NotServiceOwner = 401,
    /// Amount paid is below the service fee.
    InsufficientPayment = 402,
    ServiceNotExists = 404,
    /// The service owner has suspended new purchases.
    ServicePaused = 423,
    /// The registry has allocated [`MAX_SERVICE_ID`] services.
    ServiceLimitReached = 429,

    /// Withdrawal requested while the revenue balance is zero.
    NoRevenue = 1001,
    /// Gift recipient cannot hold access (the ledger contract itself).
    InvalidRecipient = 1002,
    Overflow = 1003,
    /// A revenue credit failed to strictly increase the balance.
    AccountingInvariant = 1004,
    AlreadyInitialized = 1005,
    NotInitialized = 1006,
}

/// A registered subscription offering.
///
/// `owner` is fixed at creation. `period_length` is fixed at creation;
/// `fee` can be changed by the owner but never to zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Service {
    pub owner: Address,
    /// Token base units charged per period.
    pub fee: i128,
    /// Seconds of access granted per paid period.
    pub period_length: u64,
    /// Blocks new purchases; owner management keeps working.
    pub paused: bool,
}

/// Access window of one subscriber against one service.
///
/// `active` is set on the first purchase and never cleared, so a lapsed
/// record still reads `active = true`. Access is `active && end_time > now`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscription {
    /// Ledger timestamp (seconds) at which access lapses.
    pub end_time: u64,
    pub active: bool,
}

// ── Events ───────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceCreatedEvent {
    pub service_id: u32,
    pub owner: Address,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriptionPurchasedEvent {
    pub service_id: u32,
    pub beneficiary: Address,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServicePauseStatusChangedEvent {
    pub service_id: u32,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeChangedEvent {
    pub service_id: u32,
    pub old_fee: i128,
    pub new_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevenueWithdrawnEvent {
    pub service_id: u32,
    pub owner: Address,
    pub amount: i128,
}
