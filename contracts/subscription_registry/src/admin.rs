use crate::error::Error;
use crate::events::{FeesWithdrawnEvent, OwnershipTransferredEvent};
use crate::payment;
use crate::storage::{Storage, BASIS_POINTS};
use soroban_sdk::{Address, Env, Symbol};

pub fn do_initialize(
    env: &Env,
    owner: &Address,
    fee_bps: u32,
    credential_issuer: &Option<Address>,
) -> Result<(), Error> {
    if Storage::is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }

    owner.require_auth();

    if fee_bps > BASIS_POINTS {
        return Err(Error::InvalidFeeRate);
    }

    Storage::set_config(env, owner, fee_bps, credential_issuer);
    Ok(())
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !Storage::is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = Storage::get_owner(env)?;
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if Storage::is_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

pub fn do_transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;
    Storage::set_owner(env, new_owner);

    env.events().publish(
        (Symbol::new(env, "owner_changed"),),
        OwnershipTransferredEvent {
            previous_owner: caller.clone(),
            new_owner: new_owner.clone(),
        },
    );
    Ok(())
}

pub fn do_set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    require_owner(env, caller)?;
    Storage::set_paused(env, paused);

    let topic = if paused { "paused" } else { "unpaused" };
    env.events().publish((Symbol::new(env, topic),), caller.clone());
    Ok(())
}

/// Move collected fees out of the registry.
///
/// # Errors
/// - `NotAuthorized`: Caller is not the owner
/// - `InvalidAmount`: `amount` is not positive
/// - `InsufficientFunds`: Registry holds less than `amount`
/// - `TransferFailed`: Asset contract rejected the transfer
pub fn do_withdraw(
    env: &Env,
    caller: &Address,
    asset: &Address,
    amount: i128,
    destination: &Address,
) -> Result<(), Error> {
    require_owner(env, caller)?;

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if payment::collected(env, asset)? < amount {
        return Err(Error::InsufficientFunds);
    }

    payment::payout(env, asset, destination, amount)?;

    env.events().publish(
        (Symbol::new(env, "fees_withdrawn"), asset.clone()),
        FeesWithdrawnEvent {
            asset: asset.clone(),
            amount,
            destination: destination.clone(),
        },
    );
    Ok(())
}
