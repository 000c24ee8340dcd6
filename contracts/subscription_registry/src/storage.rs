use crate::error::Error;
use soroban_sdk::{contracttype, Address, Env};

// Constants
pub const BASIS_POINTS: u32 = 10_000; // 100% = 10,000 basis points

pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Billing terms published by a service contract.
///
/// Decoded by field name from the service's `plan()` answer, so the layout
/// must match what services publish.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServicePlan {
    /// Billing period in seconds
    pub period: u64,
    /// Amount due per period, in base units of `asset`
    pub price: i128,
    /// SEP-41 token the service is paid in
    pub asset: Address,
    /// Receives each payment net of the registry fee
    pub beneficiary: Address,
}

/// Membership record of one account in one service.
///
/// Only active records are ever stored: unsubscribing deletes the entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscription {
    /// Access pass issued on subscribe; `None` when the registry has no issuer
    pub credential_id: Option<u64>,
    /// Ledger timestamp of the latest settled payment
    pub last_payment: u64,
    pub active: bool,
}

/// How one payment is divided between the registry and the beneficiary
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentSplit {
    pub fee: i128,
    pub net: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    Initialized,
    Owner,
    FeeBps,
    CredentialIssuer,
    Paused,
    // --- persistent() ---
    Subscription(Address, Address), // (service, account)
    AccountServices(Address),       // account → Vec<service>
    ServiceSlot(Address, Address),  // (account, service) → position in AccountServices
    // --- temporary() ---
    Lock(Address, Address), // (service, account)
}

pub struct Storage;

impl Storage {
    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn bump_persistent(env: &Env, key: &DataKey) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    // Configuration
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn set_config(
        env: &Env,
        owner: &Address,
        fee_bps: u32,
        credential_issuer: &Option<Address>,
    ) {
        let instance = env.storage().instance();
        instance.set(&DataKey::Initialized, &true);
        instance.set(&DataKey::Owner, owner);
        instance.set(&DataKey::FeeBps, &fee_bps);
        instance.set(&DataKey::Paused, &false);
        if let Some(issuer) = credential_issuer {
            instance.set(&DataKey::CredentialIssuer, issuer);
        }
    }

    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn get_fee_bps(env: &Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::FeeBps)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_credential_issuer(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::CredentialIssuer)
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    // Subscriptions
    pub fn get_subscription(env: &Env, service: &Address, account: &Address) -> Option<Subscription> {
        env.storage()
            .persistent()
            .get(&DataKey::Subscription(service.clone(), account.clone()))
    }

    pub fn set_subscription(
        env: &Env,
        service: &Address,
        account: &Address,
        subscription: &Subscription,
    ) {
        let key = DataKey::Subscription(service.clone(), account.clone());
        env.storage().persistent().set(&key, subscription);
        Self::bump_persistent(env, &key);
    }

    pub fn remove_subscription(env: &Env, service: &Address, account: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Subscription(service.clone(), account.clone()));
    }
}
