#![no_std]

mod account_index;
mod admin;
mod credential;
mod directory;
mod error;
mod events;
mod fees;
mod guard;
mod lifecycle;
mod payment;
mod storage;
mod subscription;

pub use directory::{ServiceClient, ServiceInterface};
pub use error::Error;
pub use events::{
    FeesWithdrawnEvent, OwnershipTransferredEvent, PaymentEvent, RevokeFailedEvent,
    SubscribedEvent, UninstalledEvent, UnsubscribedEvent,
};
pub use storage::{PaymentSplit, ServicePlan, Subscription};

use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Vec};

#[contract]
pub struct SubscriptionRegistry;

#[contractimpl]
impl SubscriptionRegistry {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the registry
    ///
    /// # Arguments
    /// * `owner` - Administrator allowed to withdraw fees and pause
    /// * `fee_bps` - Fee taken from every payment (basis points, 100 = 1%)
    /// * `credential_issuer` - Access pass contract the registry operates, if any
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Registry already initialized
    /// - `InvalidFeeRate`: `fee_bps` above 10_000
    pub fn initialize(
        env: Env,
        owner: Address,
        fee_bps: u32,
        credential_issuer: Option<Address>,
    ) -> Result<(), Error> {
        admin::do_initialize(&env, &owner, fee_bps, &credential_issuer)?;
        Storage::bump_instance(&env);
        Ok(())
    }

    // ============================================
    // SUBSCRIPTIONS
    // ============================================

    /// Subscribe `account` to `service` and pay the first period
    ///
    /// Returns the issued access pass id, or `None` without an issuer.
    ///
    /// # Errors
    /// - `InvalidServiceAddress` / `InvalidServiceContract`: Service can't be billed
    /// - `AlreadySubscribed`: Subscription already active
    /// - `InsufficientFunds`: Balance below the plan price
    /// - `TransferFailed`: Asset rejected a transfer
    /// - `CredentialIssueFailed`: Issuer rejected the pass
    /// - `ContractPaused`: Registry is paused
    pub fn subscribe(env: Env, service: Address, account: Address) -> Result<Option<u64>, Error> {
        let credential_id = subscription::do_subscribe(&env, &service, &account)?;
        Storage::bump_instance(&env);
        Ok(credential_id)
    }

    /// End a subscription. No funds move and pausing does not block it.
    ///
    /// # Errors
    /// - `AccountNotSubscribed`: No active subscription
    pub fn unsubscribe(env: Env, service: Address, account: Address) -> Result<(), Error> {
        subscription::do_unsubscribe(&env, &service, &account)?;
        Storage::bump_instance(&env);
        Ok(())
    }

    /// Pay the next period of an active subscription
    ///
    /// # Errors
    /// - `AccountNotSubscribed`: No active subscription
    /// - `SubscriptionIsActive`: Current period still running
    /// - `InsufficientFunds`: Balance below the plan price
    /// - `TransferFailed`: Asset rejected a transfer
    /// - `ContractPaused`: Registry is paused
    pub fn pay_subscription(env: Env, service: Address, account: Address) -> Result<(), Error> {
        subscription::do_pay_subscription(&env, &service, &account)?;
        Storage::bump_instance(&env);
        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn is_subscribed(env: Env, service: Address, account: Address) -> bool {
        subscription::is_active(&env, &service, &account)
    }

    /// # Errors
    /// - `AccountNotSubscribed`: No active subscription
    pub fn is_payment_due(env: Env, service: Address, account: Address) -> Result<bool, Error> {
        subscription::is_payment_due(&env, &service, &account)
    }

    pub fn next_payment_due(env: Env, service: Address, account: Address) -> Result<u64, Error> {
        subscription::next_payment_due(&env, &service, &account)
    }

    pub fn get_subscription(env: Env, service: Address, account: Address) -> Option<Subscription> {
        Storage::get_subscription(&env, &service, &account)
    }

    /// Services `account` is currently subscribed to, in no particular order
    pub fn account_services(env: Env, account: Address) -> Vec<Address> {
        account_index::services(&env, &account)
    }

    pub fn subscription_count(env: Env, account: Address) -> u32 {
        account_index::len(&env, &account)
    }

    /// Plan of a service, after the same checks `subscribe` runs
    pub fn get_plan(env: Env, service: Address) -> Result<ServicePlan, Error> {
        directory::resolve(&env, &service)
    }

    /// How the next payment to `service` would be split
    pub fn preview_payment(env: Env, service: Address) -> Result<PaymentSplit, Error> {
        let plan = directory::resolve(&env, &service)?;
        let fee_bps = Storage::get_fee_bps(&env)?;
        fees::split_payment(plan.price, fee_bps).ok_or(Error::Overflow)
    }

    // ============================================
    // FEES
    // ============================================

    /// Withdraw collected fees (owner only)
    ///
    /// # Errors
    /// - `NotAuthorized`: Caller is not the owner
    /// - `InvalidAmount`: `amount` is not positive
    /// - `InsufficientFunds`: Less than `amount` collected
    pub fn withdraw(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        destination: Address,
    ) -> Result<(), Error> {
        admin::do_withdraw(&env, &caller, &asset, amount, &destination)?;
        Storage::bump_instance(&env);
        Ok(())
    }

    /// Fees held by the registry in `asset`
    pub fn collected_fees(env: Env, asset: Address) -> Result<i128, Error> {
        payment::collected(&env, &asset)
    }

    // ============================================
    // LIFECYCLE HOOKS
    // ============================================

    pub fn on_install(env: Env, account: Address, data: Bytes) {
        lifecycle::on_install(&env, &account, &data);
    }

    /// Remove every subscription of `account`; returns how many were removed
    pub fn on_uninstall(env: Env, account: Address, data: Bytes) -> Result<u32, Error> {
        let removed = lifecycle::on_uninstall(&env, &account, &data)?;
        Storage::bump_instance(&env);
        Ok(removed)
    }

    // ============================================
    // ADMINISTRATION
    // ============================================

    pub fn owner(env: Env) -> Result<Address, Error> {
        Storage::get_owner(&env)
    }

    /// Fee rate in basis points (out of 10_000)
    pub fn fee_rate(env: Env) -> Result<u32, Error> {
        Storage::get_fee_bps(&env)
    }

    pub fn credential_issuer(env: Env) -> Option<Address> {
        Storage::get_credential_issuer(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::is_paused(&env)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        admin::do_transfer_ownership(&env, &caller, &new_owner)
    }

    /// Block new subscriptions and payments. Unsubscribing stays open.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        admin::do_set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        admin::do_set_paused(&env, &caller, false)
    }
}
