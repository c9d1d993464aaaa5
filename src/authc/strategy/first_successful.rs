//! First-successful strategy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::super::{
    Account, AuthenticationAttempt, AuthenticationError, MultiRealmAuthenticationError,
};
use super::AuthenticationStrategy;

/// Return the first supporting realm's account and stop there.
///
/// Realm errors are recorded and the pass moves on to the next realm; they
/// only surface if no realm succeeds. When exactly one error was recorded it
/// is re-raised unchanged, preserving the realm's own failure type; two or
/// more are wrapped in a [`MultiRealmAuthenticationError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstRealmSuccessful;

#[async_trait]
impl AuthenticationStrategy for FirstRealmSuccessful {
    async fn execute(
        &self,
        attempt: &AuthenticationAttempt,
    ) -> Result<Option<Arc<dyn Account>>, AuthenticationError> {
        let token = attempt.token();
        trace!(
            realms = attempt.realms().len(),
            "starting first-successful authentication pass"
        );

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
                Ok(Some(account)) => {
                    debug!(
                        realm = realm.name(),
                        "realm authenticated the token; remaining realms not consulted"
                    );
                    return Ok(Some(account));
                }
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

        if errors.is_empty() {
            // No account and no error: either nothing supported the token or
            // every supporting realm declined. The caller interprets this.
            return Ok(None);
        }
        if errors.len() == 1 {
            // A lone failure surfaces as the realm raised it, not wrapped.
            let (_, error) = errors.remove(0);
            return Err(error);
        }
        Err(MultiRealmAuthenticationError::new(errors).into())
    }
}
