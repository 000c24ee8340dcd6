use crate::error::Error;
use crate::storage::DataKey;
use soroban_sdk::{Address, Env};

/// Run `f` while holding the lock of one (service, account) pair.
///
/// The lock lives in temporary storage and is released on every exit path
/// of `f`. A failing invocation rolls back the whole ledger write set, lock
/// included.
pub fn with_lock<T>(
    env: &Env,
    service: &Address,
    account: &Address,
    f: impl FnOnce() -> Result<T, Error>,
) -> Result<T, Error> {
    let key = DataKey::Lock(service.clone(), account.clone());
    if env.storage().temporary().has(&key) {
        return Err(Error::Reentrant);
    }

    env.storage().temporary().set(&key, &true);
    let result = f();
    env.storage().temporary().remove(&key);

    result
}

#[cfg(test)]
fn is_locked(env: &Env, service: &Address, account: &Address) -> bool {
    env.storage()
        .temporary()
        .has(&DataKey::Lock(service.clone(), account.clone()))
}
