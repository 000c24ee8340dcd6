use soroban_sdk::{contracttype, Address};

// ~30 days of ledgers at 5s per ledger
pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 17_280;

/// Billing terms of the service.
///
/// Field names are part of the cross-contract interface: subscription
/// registries decode this struct by name when they probe `plan()`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServicePlan {
    /// Length of one billing period in seconds
    pub period: u64,
    /// Amount charged per period, in base units of `asset`
    pub price: i128,
    /// SEP-41 token the plan is paid in
    pub asset: Address,
    /// Receives each payment net of the registry fee
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Plan,
    Initialized,
}
