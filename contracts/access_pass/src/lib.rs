#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::Pass;

use events::{IssuedEvent, RevokedEvent, TransferEvent};
use storage::{DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct AccessPass;

#[contractimpl]
impl AccessPass {
    /// Initialize the pass contract
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Transferable, &false);
        env.storage().instance().set(&DataKey::NextPassId, &1u64);

        Ok(())
    }

    /// Add an operator (a subscription registry)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn add_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin = Self::admin(&env)?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Operators(operator), &true);

        Ok(())
    }

    /// Remove an operator
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn remove_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin = Self::admin(&env)?;
        admin.require_auth();

        env.storage()
            .instance()
            .remove(&DataKey::Operators(operator));

        Ok(())
    }

    /// Allow or forbid holder-to-holder transfers
    pub fn set_transferable(env: Env, transferable: bool) -> Result<(), Error> {
        let admin = Self::admin(&env)?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Transferable, &transferable);

        Ok(())
    }

    /// Issue a new pass to `to` (only operators)
    ///
    /// Pass ids are sequential and never reused.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NotOperator`: `operator` was not registered by the admin
    pub fn issue(env: Env, operator: Address, to: Address) -> Result<u64, Error> {
        Self::require_operator(&env, &operator)?;

        let pass_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextPassId)
            .ok_or(Error::NotInitialized)?;
        let next_id = pass_id.checked_add(1).ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::NextPassId, &next_id);

        let pass_key = DataKey::Pass(pass_id);
        env.storage().persistent().set(
            &pass_key,
            &Pass {
                holder: to.clone(),
                issued_at: env.ledger().timestamp(),
            },
        );
        env.storage().persistent().extend_ttl(
            &pass_key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        Self::adjust_balance(&env, &to, true)?;

        env.events().publish(
            (Symbol::new(&env, "issued"), pass_id),
            IssuedEvent {
                pass_id,
                operator,
                holder: to,
            },
        );

        Ok(pass_id)
    }

    /// Revoke a pass (only operators)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NotOperator`: `operator` was not registered by the admin
    /// - `PassNotFound`: Unknown or already revoked pass
    pub fn revoke(env: Env, operator: Address, pass_id: u64) -> Result<(), Error> {
        Self::require_operator(&env, &operator)?;

        let pass_key = DataKey::Pass(pass_id);
        let pass: Pass = env
            .storage()
            .persistent()
            .get(&pass_key)
            .ok_or(Error::PassNotFound)?;

        env.storage().persistent().remove(&pass_key);
        Self::adjust_balance(&env, &pass.holder, false)?;

        env.events().publish(
            (Symbol::new(&env, "revoked"), pass_id),
            RevokedEvent {
                pass_id,
                operator,
                holder: pass.holder,
            },
        );

        Ok(())
    }

    /// Move a pass between holders, if the admin enabled transfers
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `TransferRestricted`: Transfers are disabled
    /// - `PassNotFound`: Unknown pass
    /// - `NotHolder`: `from` does not hold the pass
    pub fn transfer(env: Env, from: Address, to: Address, pass_id: u64) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }

        from.require_auth();

        let transferable = env
            .storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Transferable)
            .unwrap_or(false);
        if !transferable {
            return Err(Error::TransferRestricted);
        }

        let pass_key = DataKey::Pass(pass_id);
        let mut pass: Pass = env
            .storage()
            .persistent()
            .get(&pass_key)
            .ok_or(Error::PassNotFound)?;

        if pass.holder != from {
            return Err(Error::NotHolder);
        }

        pass.holder = to.clone();
        env.storage().persistent().set(&pass_key, &pass);
        env.storage().persistent().extend_ttl(
            &pass_key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
        Self::adjust_balance(&env, &from, false)?;
        Self::adjust_balance(&env, &to, true)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), pass_id),
            TransferEvent { pass_id, from, to },
        );

        Ok(())
    }

    /// Current holder of a pass
    pub fn holder_of(env: Env, pass_id: u64) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get::<DataKey, Pass>(&DataKey::Pass(pass_id))
            .map(|pass| pass.holder)
            .ok_or(Error::PassNotFound)
    }

    /// Number of live passes held by an address
    pub fn balance_of(env: Env, holder: Address) -> u32 {
        env.storage()
            .persistent()
            .get::<DataKey, u32>(&DataKey::Balance(holder))
            .unwrap_or(0)
    }

    /// Total passes ever issued, including revoked ones
    pub fn total_issued(env: Env) -> u64 {
        env.storage()
            .instance()
            .get::<DataKey, u64>(&DataKey::NextPassId)
            .map(|next| next.saturating_sub(1))
            .unwrap_or(0)
    }

    /// Check if address is an operator
    pub fn is_operator(env: Env, address: Address) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Operators(address))
            .unwrap_or(false)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    fn require_operator(env: &Env, operator: &Address) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }

        operator.require_auth();

        if !Self::is_operator(env.clone(), operator.clone()) {
            return Err(Error::NotOperator);
        }
        Ok(())
    }

    fn adjust_balance(env: &Env, holder: &Address, increase: bool) -> Result<(), Error> {
        let key = DataKey::Balance(holder.clone());
        let current = env
            .storage()
            .persistent()
            .get::<DataKey, u32>(&key)
            .unwrap_or(0);

        let updated = if increase {
            current.checked_add(1).ok_or(Error::Overflow)?
        } else {
            current.checked_sub(1).ok_or(Error::Overflow)?
        };

        if updated == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &updated);
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        }
        Ok(())
    }
}
