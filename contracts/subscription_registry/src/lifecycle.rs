use crate::account_index;
use crate::admin::require_initialized;
use crate::error::Error;
use crate::events::UninstalledEvent;
use crate::guard::with_lock;
use crate::storage::Storage;
use crate::subscription::purge;
use soroban_sdk::{log, Address, Bytes, Env, Symbol};

/// Smart-account hook run when the registry is attached. Holds no state.
pub fn on_install(env: &Env, account: &Address, _data: &Bytes) {
    account.require_auth();
    log!(env, "registry installed", account.clone());
}

/// Smart-account hook run when the registry is detached.
///
/// Ends every subscription of `account`. The loop is bounded by the index
/// length read on entry.
pub fn on_uninstall(env: &Env, account: &Address, _data: &Bytes) -> Result<u32, Error> {
    require_initialized(env)?;
    account.require_auth();

    let pending = account_index::len(env, account);
    let mut removed = 0u32;

    for _ in 0..pending {
        let Some(service) = account_index::pop(env, account) else {
            break;
        };

        with_lock(env, &service, account, || {
            if let Some(subscription) = Storage::get_subscription(env, &service, account) {
                purge(env, &service, account, &subscription);
            }
            Ok(())
        })?;
        removed += 1;
    }

    env.events().publish(
        (Symbol::new(env, "uninstalled"), account.clone()),
        UninstalledEvent {
            account: account.clone(),
            removed,
        },
    );

    Ok(removed)
}
