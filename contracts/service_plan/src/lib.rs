#![no_std]

mod error;
mod events;
mod storage;
mod validation;

pub use error::Error;
pub use storage::ServicePlan;

use events::PlanPublishedEvent;
use storage::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use validation::validate_plan;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct ServicePlanContract;

#[contractimpl]
impl ServicePlanContract {
    // ============================================
    // PUBLICATION
    // ============================================

    /// Publish the plan. Terms cannot be changed afterwards.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Plan already published
    /// - `InvalidPeriod`: `period` is zero
    /// - `InvalidPrice`: `price` is negative
    pub fn initialize(
        env: Env,
        admin: Address,
        period: u64,
        price: i128,
        asset: Address,
        beneficiary: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        validate_plan(period, price)?;

        let plan = ServicePlan {
            period,
            price,
            asset: asset.clone(),
            beneficiary: beneficiary.clone(),
        };

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Plan, &plan);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        env.events().publish(
            (Symbol::new(&env, "published"),),
            PlanPublishedEvent {
                admin,
                period,
                price,
                asset,
                beneficiary,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Billing terms queried by subscription registries
    pub fn plan(env: Env) -> Result<ServicePlan, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Plan)
            .ok_or(Error::NotInitialized)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }
}
