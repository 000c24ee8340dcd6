use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuedEvent {
    pub pass_id: u64,
    pub operator: Address,
    pub holder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevokedEvent {
    pub pass_id: u64,
    pub operator: Address,
    pub holder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    pub pass_id: u64,
    pub from: Address,
    pub to: Address,
}
