//! All-successful strategy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::super::{Account, AuthenticationAttempt, AuthenticationError};
use super::{AuthenticationStrategy, RealmSuccesses};

/// Require every supporting realm to authenticate without error.
///
/// This is an all-or-first-failure policy: realm errors are not caught — the
/// first one propagates unchanged and aborts the pass, and later realms are
/// never consulted. Successes accumulate into a
/// [`CompositeAccount`](super::super::CompositeAccount) exactly as in
/// [`AtLeastOneRealmSuccessful`](super::AtLeastOneRealmSuccessful). If no
/// realm supported the token at all the pass yields `Ok(None)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllRealmsSuccessful;

#[async_trait]
impl AuthenticationStrategy for AllRealmsSuccessful {
    async fn execute(
        &self,
        attempt: &AuthenticationAttempt,
    ) -> Result<Option<Arc<dyn Account>>, AuthenticationError> {
        let token = attempt.token();
        trace!(
            realms = attempt.realms().len(),
            "starting all-successful authentication pass"
        );

        let mut successes = RealmSuccesses::new();

        for realm in attempt.realms() {
            if !realm.supports(token) {
                debug!(
                    realm = realm.name(),
                    "realm does not support the submitted token; skipping"
                );
                continue;
            }

            trace!(realm = realm.name(), "consulting realm");
            // Errors propagate immediately; the `?` aborts the whole pass.
            if let Some(account) = realm.authenticate(token).await? {
                successes.record(realm.name(), account);
            }
        }

        Ok(successes.finish())
    }
}
