use crate::account_index;
use crate::admin::{require_initialized, require_not_paused};
use crate::credential;
use crate::directory;
use crate::error::Error;
use crate::events::{PaymentEvent, SubscribedEvent, UnsubscribedEvent};
use crate::guard::with_lock;
use crate::payment;
use crate::storage::{Storage, Subscription};
use soroban_sdk::{log, Address, Env, Symbol};

/// Subscribe `account` to `service`, charging the first period up front.
///
/// Order: plan lookup, balance check, payment, pass issuance, then the
/// record. Any failure leaves no trace.
pub fn do_subscribe(env: &Env, service: &Address, account: &Address) -> Result<Option<u64>, Error> {
    require_initialized(env)?;
    account.require_auth();
    require_not_paused(env)?;

    with_lock(env, service, account, || {
        let plan = directory::resolve(env, service)?;

        if is_active(env, service, account) {
            return Err(Error::AlreadySubscribed);
        }

        payment::ensure_funds(env, &plan.asset, account, plan.price)?;
        let fee_bps = Storage::get_fee_bps(env)?;
        let split = payment::settle(env, &plan, account, fee_bps)?;

        let credential_id = credential::issue(env, account)?;

        Storage::set_subscription(
            env,
            service,
            account,
            &Subscription {
                credential_id,
                last_payment: env.ledger().timestamp(),
                active: true,
            },
        );
        account_index::insert(env, account, service);

        env.events().publish(
            (Symbol::new(env, "subscribed"), service.clone(), account.clone()),
            SubscribedEvent {
                service: service.clone(),
                account: account.clone(),
                credential_id,
                fee: split.fee,
                net: split.net,
            },
        );

        Ok(credential_id)
    })
}

pub fn do_unsubscribe(env: &Env, service: &Address, account: &Address) -> Result<(), Error> {
    require_initialized(env)?;
    account.require_auth();

    with_lock(env, service, account, || {
        let subscription = active_subscription(env, service, account)?;
        account_index::remove(env, account, service);
        purge(env, service, account, &subscription);
        Ok(())
    })
}

/// Delete the record and revoke its pass. Index bookkeeping is up to the caller.
pub fn purge(env: &Env, service: &Address, account: &Address, subscription: &Subscription) {
    Storage::remove_subscription(env, service, account);
    credential::revoke_best_effort(env, service, account, subscription.credential_id);

    env.events().publish(
        (Symbol::new(env, "unsubscribed"), service.clone(), account.clone()),
        UnsubscribedEvent {
            service: service.clone(),
            account: account.clone(),
        },
    );
}

/// Pay the next period of an active subscription once it is due.
pub fn do_pay_subscription(env: &Env, service: &Address, account: &Address) -> Result<(), Error> {
    require_initialized(env)?;
    account.require_auth();
    require_not_paused(env)?;

    with_lock(env, service, account, || {
        let mut subscription = active_subscription(env, service, account)?;
        let plan = directory::resolve(env, service)?;

        let now = env.ledger().timestamp();
        let due_at = subscription.last_payment.saturating_add(plan.period);
        if now < due_at {
            log!(
                env,
                "payment not due",
                subscription.last_payment,
                plan.period,
                now
            );
            return Err(Error::SubscriptionIsActive);
        }

        payment::ensure_funds(env, &plan.asset, account, plan.price)?;
        let fee_bps = Storage::get_fee_bps(env)?;
        let split = payment::settle(env, &plan, account, fee_bps)?;

        subscription.last_payment = now;
        Storage::set_subscription(env, service, account, &subscription);
        account_index::touch(env, account, service);

        env.events().publish(
            (Symbol::new(env, "paid"), service.clone(), account.clone()),
            PaymentEvent {
                service: service.clone(),
                account: account.clone(),
                fee: split.fee,
                net: split.net,
                last_payment: now,
            },
        );

        Ok(())
    })
}

// ============================================
// QUERIES
// ============================================

pub fn is_active(env: &Env, service: &Address, account: &Address) -> bool {
    Storage::get_subscription(env, service, account)
        .map(|subscription| subscription.active)
        .unwrap_or(false)
}

pub fn active_subscription(
    env: &Env,
    service: &Address,
    account: &Address,
) -> Result<Subscription, Error> {
    match Storage::get_subscription(env, service, account) {
        Some(subscription) if subscription.active => Ok(subscription),
        _ => Err(Error::AccountNotSubscribed),
    }
}

/// Timestamp from which the next period can be paid
pub fn next_payment_due(env: &Env, service: &Address, account: &Address) -> Result<u64, Error> {
    let subscription = active_subscription(env, service, account)?;
    let plan = directory::resolve(env, service)?;
    Ok(subscription.last_payment.saturating_add(plan.period))
}

pub fn is_payment_due(env: &Env, service: &Address, account: &Address) -> Result<bool, Error> {
    let due_at = next_payment_due(env, service, account)?;
    Ok(env.ledger().timestamp() >= due_at)
}
