//! Access passes handed out to subscribers.
//!
//! The registry acts as an operator of an external pass contract. Issuing is
//! part of subscribing and must succeed; revoking is best effort so that an
//! account can always leave a service.

use crate::error::Error;
use crate::events::RevokeFailedEvent;
use crate::storage::Storage;
use soroban_sdk::{contractclient, log, Address, Env, Symbol};

#[allow(dead_code)]
#[contractclient(name = "CredentialIssuerClient")]
pub trait CredentialIssuer {
    fn issue(env: Env, operator: Address, to: Address) -> u64;
    fn revoke(env: Env, operator: Address, pass_id: u64);
}

/// Issue a pass to `account`, or `None` when no issuer is configured.
///
/// # Errors
/// - `CredentialIssueFailed`: Issuer rejected the call
pub fn issue(env: &Env, account: &Address) -> Result<Option<u64>, Error> {
    let Some(issuer) = Storage::get_credential_issuer(env) else {
        return Ok(None);
    };

    let client = CredentialIssuerClient::new(env, &issuer);
    match client.try_issue(&env.current_contract_address(), account) {
        Ok(Ok(pass_id)) => Ok(Some(pass_id)),
        _ => Err(Error::CredentialIssueFailed),
    }
}

pub fn revoke_best_effort(
    env: &Env,
    service: &Address,
    account: &Address,
    credential_id: Option<u64>,
) {
    let (Some(issuer), Some(credential_id)) = (Storage::get_credential_issuer(env), credential_id)
    else {
        return;
    };

    let client = CredentialIssuerClient::new(env, &issuer);
    if let Ok(Ok(())) = client.try_revoke(&env.current_contract_address(), &credential_id) {
        return;
    }

    log!(
        env,
        "credential revoke failed",
        service.clone(),
        account.clone(),
        credential_id
    );
    env.events().publish(
        (Symbol::new(env, "revoke_failed"), service.clone(), account.clone()),
        RevokeFailedEvent {
            service: service.clone(),
            account: account.clone(),
            credential_id,
        },
    );
}
