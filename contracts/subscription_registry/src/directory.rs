//! Service lookup: turns a service address into validated billing terms.
//!
//! Services are external contracts. Nothing about them is trusted until the
//! capability probe below returns a plan that can actually be billed.

use crate::error::Error;
use crate::storage::ServicePlan;
use soroban_sdk::{contractclient, Address, Env};

/// Interface every billable service contract exposes
#[allow(dead_code)]
#[contractclient(name = "ServiceClient")]
pub trait ServiceInterface {
    fn plan(env: Env) -> ServicePlan;
}

const STRKEY_LEN: usize = 56;

/// True when the address is a contract id (`C…`) rather than an account (`G…`).
pub fn is_contract_address(address: &Address) -> bool {
    let strkey = address.to_string();
    if strkey.len() as usize != STRKEY_LEN {
        return false;
    }

    let mut buf = [0u8; STRKEY_LEN];
    strkey.copy_into_slice(&mut buf);
    buf[0] == b'C'
}

/// Resolve the plan of `service`.
///
/// # Errors
/// - `InvalidServiceAddress`: Address is an account, no code can answer
/// - `InvalidServiceContract`: The `plan()` probe failed, returned something
///   that is not a plan, or returned a plan with a zero period or negative price
///
/// A `C…` address with nothing deployed behind it fails the probe, so it is
/// reported as `InvalidServiceContract`, not `InvalidServiceAddress`.
pub fn resolve(env: &Env, service: &Address) -> Result<ServicePlan, Error> {
    if !is_contract_address(service) {
        return Err(Error::InvalidServiceAddress);
    }

    let plan = match ServiceClient::new(env, service).try_plan() {
        Ok(Ok(plan)) => plan,
        _ => return Err(Error::InvalidServiceContract),
    };

    if plan.period == 0 || plan.price < 0 {
        return Err(Error::InvalidServiceContract);
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, String};

    #[test]
    fn test_account_address_is_not_a_contract() {
        let env = Env::default();
        let account = Address::from_string(&String::from_str(
            &env,
            "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
        ));

        assert!(!is_contract_address(&account));
        assert_eq!(resolve(&env, &account), Err(Error::InvalidServiceAddress));
    }

    #[test]
    fn test_contract_address() {
        let env = Env::default();
        let contract = Address::generate(&env);

        assert!(is_contract_address(&contract));
    }
}
