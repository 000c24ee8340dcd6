use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct PlanPublishedEvent {
    pub admin: Address,
    pub period: u64,
    pub price: i128,
    pub asset: Address,
    pub beneficiary: Address,
}
