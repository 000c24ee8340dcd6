use soroban_sdk::{contracttype, Address};

pub const PERSISTENT_BUMP_AMOUNT: u32 = 518_400;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 17_280;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pass {
    pub holder: Address,
    pub issued_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Transferable,
    NextPassId,
    Operators(Address),
    Pass(u64),
    Balance(Address),
}
