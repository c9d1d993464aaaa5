//! At-least-one-successful strategy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::super::{
    Account, AuthenticationAttempt, AuthenticationError, MultiRealmAuthenticationError,
};
use super::{AuthenticationStrategy, RealmSuccesses};

/// Consult every supporting realm and succeed if any of them does.
///
/// Neither errors nor successes stop the pass; every supporting realm is
/// consulted. Multiple successes are combined into a
/// [`CompositeAccount`](super::super::CompositeAccount) in consultation
/// order. If no realm succeeds and any errors were recorded, they are always
/// raised as a [`MultiRealmAuthenticationError`] — even a single error is
/// wrapped rather than re-raised directly, unlike
/// [`FirstRealmSuccessful`](super::FirstRealmSuccessful).
#[derive(Debug, Clone, Copy, Default)]
pub struct AtLeastOneRealmSuccessful;

#[async_trait]
impl AuthenticationStrategy for AtLeastOneRealmSuccessful {
    async fn execute(
        &self,
        attempt: &AuthenticationAttempt,
    ) -> Result<Option<Arc<dyn Account>>, AuthenticationError> {
        let token = attempt.token();
        trace!(
            realms = attempt.realms().len(),
            "starting at-least-one-successful authentication pass"
        );

        let mut successes = RealmSuccesses::new();
        let mut errors: Vec<(String, AuthenticationError)> = Vec::new();

        for realm in attempt.realms() {
            if !realm.supports(token) {
                debug!(
                    realm = realm.name(),
                    "realm does not support the submitted token; skipping"
                );
                continue;
            }

            trace!(realm = realm.name(), "consulting realm");
            match realm.authenticate(token).await {
                Ok(Some(account)) => successes.record(realm.name(), account),
                Ok(None) => {}
                Err(error) => {
                    debug!(
                        realm = realm.name(),
                        error = %error,
                        "realm errored during authentication pass"
                    );
                    errors.push((realm.name().to_string(), error));
                }
            }
        }

        if let Some(account) = successes.finish() {
            return Ok(Some(account));
        }
        if !errors.is_empty() {
            return Err(MultiRealmAuthenticationError::new(errors).into());
        }
        Ok(None)
    }
}
