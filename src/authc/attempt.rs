//! Authentication attempt value.

use std::sync::Arc;

use super::{AuthenticationError, AuthenticationToken, Realm};

/// One log-in attempt: the submitted token plus the ordered realms to
/// consult.
///
/// Immutable once constructed; built once per log-in and handed to an
/// [`AuthenticationStrategy`](super::AuthenticationStrategy). Strategies
/// consult the realms strictly in the order they appear here. The type system
/// already rules out a missing token; an empty realm collection is rejected
/// at construction with [`AuthenticationError::NoRealmsConfigured`].
#[derive(Clone)]
pub struct AuthenticationAttempt {
    token: Arc<dyn AuthenticationToken>,
    realms: Vec<Arc<dyn Realm>>,
}

impl AuthenticationAttempt {
    pub fn new(
        token: Arc<dyn AuthenticationToken>,
        realms: Vec<Arc<dyn Realm>>,
    ) -> Result<Self, AuthenticationError> {
        if realms.is_empty() {
            return Err(AuthenticationError::NoRealmsConfigured);
        }
        Ok(Self { token, realms })
    }

    pub fn token(&self) -> &dyn AuthenticationToken {
        self.token.as_ref()
    }

    pub fn realms(&self) -> &[Arc<dyn Realm>] {
        &self.realms
    }
}
