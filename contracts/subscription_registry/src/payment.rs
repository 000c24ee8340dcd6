use crate::error::Error;
use crate::fees::split_payment;
use crate::storage::{PaymentSplit, ServicePlan};
use soroban_sdk::{token, Address, Env};

/// Check that `payer` holds at least `amount` of `asset`.
///
/// # Errors
/// - `TransferFailed`: Asset contract did not answer the balance query
/// - `InsufficientFunds`: Balance is below `amount`
pub fn ensure_funds(env: &Env, asset: &Address, payer: &Address, amount: i128) -> Result<(), Error> {
    let balance = balance_of(env, asset, payer)?;
    if balance < amount {
        return Err(Error::InsufficientFunds);
    }
    Ok(())
}

/// Collect one period's price from `payer`.
///
/// The fee share goes to the registry itself and the rest to the plan's
/// beneficiary. With a zero fee rate the whole price moves in one transfer.
pub fn settle(
    env: &Env,
    plan: &ServicePlan,
    payer: &Address,
    fee_bps: u32,
) -> Result<PaymentSplit, Error> {
    let split = split_payment(plan.price, fee_bps).ok_or(Error::Overflow)?;

    if fee_bps > 0 {
        transfer(env, &plan.asset, payer, &env.current_contract_address(), split.fee)?;
    }
    transfer(env, &plan.asset, payer, &plan.beneficiary, split.net)?;

    Ok(split)
}

/// Fees held by the registry in `asset`
pub fn collected(env: &Env, asset: &Address) -> Result<i128, Error> {
    balance_of(env, asset, &env.current_contract_address())
}

/// Send collected fees out of the registry
pub fn payout(env: &Env, asset: &Address, destination: &Address, amount: i128) -> Result<(), Error> {
    transfer(env, asset, &env.current_contract_address(), destination, amount)
}

fn balance_of(env: &Env, asset: &Address, holder: &Address) -> Result<i128, Error> {
    match token::Client::new(env, asset).try_balance(holder) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(Error::TransferFailed),
    }
}

fn transfer(env: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }

    match token::Client::new(env, asset).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
