//! Per-account list of subscribed services.
//!
//! Each account owns a `Vec<Address>` of services plus a slot entry per
//! service recording its position, so membership checks and removals do not
//! scan the list. Removal swaps the last element into the freed slot.

use crate::storage::{DataKey, Storage};
use soroban_sdk::{Address, Env, Vec};

pub fn services(env: &Env, account: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::AccountServices(account.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn len(env: &Env, account: &Address) -> u32 {
    services(env, account).len()
}

pub fn contains(env: &Env, account: &Address, service: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ServiceSlot(account.clone(), service.clone()))
}

/// Append `service`; returns false if it was already listed.
pub fn insert(env: &Env, account: &Address, service: &Address) -> bool {
    if contains(env, account, service) {
        return false;
    }

    let mut list = services(env, account);
    let slot = list.len();
    list.push_back(service.clone());

    write_list(env, account, &list);
    write_slot(env, account, service, slot);
    true
}

/// Remove `service`; returns false if it was not listed.
pub fn remove(env: &Env, account: &Address, service: &Address) -> bool {
    let slot_key = DataKey::ServiceSlot(account.clone(), service.clone());
    let Some(slot) = env.storage().persistent().get::<DataKey, u32>(&slot_key) else {
        return false;
    };

    let mut list = services(env, account);
    let Some(last) = list.pop_back() else {
        env.storage().persistent().remove(&slot_key);
        return false;
    };

    if slot < list.len() {
        list.set(slot, last.clone());
        write_slot(env, account, &last, slot);
    }

    write_list(env, account, &list);
    env.storage().persistent().remove(&slot_key);
    true
}

/// Take the most recently listed service off the index.
pub fn pop(env: &Env, account: &Address) -> Option<Address> {
    let mut list = services(env, account);
    let last = list.pop_back()?;

    write_list(env, account, &list);
    env.storage()
        .persistent()
        .remove(&DataKey::ServiceSlot(account.clone(), last.clone()));
    Some(last)
}

/// Extend the TTL of the index entries behind an active subscription.
pub fn touch(env: &Env, account: &Address, service: &Address) {
    Storage::bump_persistent(env, &DataKey::AccountServices(account.clone()));
    Storage::bump_persistent(env, &DataKey::ServiceSlot(account.clone(), service.clone()));
}

fn write_list(env: &Env, account: &Address, list: &Vec<Address>) {
    let key = DataKey::AccountServices(account.clone());
    env.storage().persistent().set(&key, list);
    Storage::bump_persistent(env, &key);
}

fn write_slot(env: &Env, account: &Address, service: &Address, slot: u32) {
    let key = DataKey::ServiceSlot(account.clone(), service.clone());
    env.storage().persistent().set(&key, &slot);
    Storage::bump_persistent(env, &key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
    use crate::SubscriptionRegistry;
    use soroban_sdk::{
        testutils::{storage::Persistent as _, Address as _},
        vec,
    };

    #[test]
    fn test_insert_no_duplicates() {
        let env = Env::default();
        let contract_id = env.register(SubscriptionRegistry, ());
        let account = Address::generate(&env);
        let service = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert!(insert(&env, &account, &service));
            assert!(!insert(&env, &account, &service));
            assert_eq!(len(&env, &account), 1);
            assert!(contains(&env, &account, &service));
        });
    }

    #[test]
    fn test_remove_swaps_last_into_slot() {
        let env = Env::default();
        let contract_id = env.register(SubscriptionRegistry, ());
        let account = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let c = Address::generate(&env);

        env.as_contract(&contract_id, || {
            insert(&env, &account, &a);
            insert(&env, &account, &b);
            insert(&env, &account, &c);

            assert!(remove(&env, &account, &a));
            assert_eq!(services(&env, &account), vec![&env, c.clone(), b.clone()]);
            assert!(!contains(&env, &account, &a));

            // moved element keeps a correct slot
            assert!(remove(&env, &account, &c));
            assert_eq!(services(&env, &account), vec![&env, b.clone()]);

            assert!(!remove(&env, &account, &c));
            assert!(remove(&env, &account, &b));
            assert_eq!(len(&env, &account), 0);
        });
    }

    #[test]
    fn test_touch_extends_index_entries() {
        let env = Env::default();
        let contract_id = env.register(SubscriptionRegistry, ());
        let account = Address::generate(&env);
        let service = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let list_key = DataKey::AccountServices(account.clone());
            let slot_key = DataKey::ServiceSlot(account.clone(), service.clone());
            env.storage()
                .persistent()
                .set(&list_key, &vec![&env, service.clone()]);
            env.storage().persistent().set(&slot_key, &0u32);
            assert!(env.storage().persistent().get_ttl(&list_key) < PERSISTENT_LIFETIME_THRESHOLD);

            touch(&env, &account, &service);

            assert_eq!(env.storage().persistent().get_ttl(&list_key), PERSISTENT_BUMP_AMOUNT);
            assert_eq!(env.storage().persistent().get_ttl(&slot_key), PERSISTENT_BUMP_AMOUNT);
        });
    }

    #[test]
    fn test_pop_until_empty() {
        let env = Env::default();
        let contract_id = env.register(SubscriptionRegistry, ());
        let account = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        env.as_contract(&contract_id, || {
            insert(&env, &account, &a);
            insert(&env, &account, &b);

            assert_eq!(pop(&env, &account), Some(b.clone()));
            assert_eq!(pop(&env, &account), Some(a.clone()));
            assert_eq!(pop(&env, &account), None);
            assert!(!contains(&env, &account, &a));

            // empty list is reusable
            assert!(insert(&env, &account, &b));
            assert_eq!(services(&env, &account), vec![&env, b.clone()]);
        });
    }
}
