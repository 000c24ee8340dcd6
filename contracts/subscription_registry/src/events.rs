use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscribedEvent {
    pub service: Address,
    pub account: Address,
    pub credential_id: Option<u64>,
    pub fee: i128,
    pub net: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsubscribedEvent {
    pub service: Address,
    pub account: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentEvent {
    pub service: Address,
    pub account: Address,
    pub fee: i128,
    pub net: i128,
    pub last_payment: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevokeFailedEvent {
    pub service: Address,
    pub account: Address,
    pub credential_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UninstalledEvent {
    pub account: Address,
    pub removed: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub asset: Address,
    pub amount: i128,
    pub destination: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}
