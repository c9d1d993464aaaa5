//! Authentication errors.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Failure raised by a realm or by the authentication engine itself.
///
/// The stock variants mirror the failures credential stores commonly
/// distinguish; strategies treat them all opaquely and only decide whether to
/// record, aggregate, or propagate them.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Submitted credentials did not match the account's stored credentials.
    #[error("submitted credentials did not match")]
    IncorrectCredentials,

    /// No account data exists for the submitted principal.
    #[error("no account found for the submitted principal")]
    UnknownAccount,

    /// The account exists but its credentials have expired.
    #[error("account credentials have expired")]
    ExpiredCredentials,

    /// The account exists but is administratively locked.
    #[error("account is locked")]
    LockedAccount,

    /// Realm-specific failure that does not fit a stock variant.
    #[error("realm [{realm}] failed to authenticate the token: {message}")]
    Realm { realm: String, message: String },

    /// An [`AuthenticationAttempt`](super::AuthenticationAttempt) requires at
    /// least one realm.
    #[error(
        "no realms configured; one or more realms must be present to execute \
         an authentication attempt"
    )]
    NoRealmsConfigured,

    /// Aggregated failure across multiple realms.
    #[error(transparent)]
    MultiRealm(#[from] MultiRealmAuthenticationError),
}

/// Failures from two or more realms (or, under the at-least-one strategy,
/// one or more) collected over a single authentication pass.
///
/// Entries are keyed by realm name and kept in consultation order. The first
/// recorded error is treated as the primary cause for display purposes; the
/// full mapping is available through [`realm_errors`](Self::realm_errors).
#[derive(Debug)]
pub struct MultiRealmAuthenticationError {
    errors: Vec<(String, AuthenticationError)>,
}

impl MultiRealmAuthenticationError {
    /// Aggregates the given realm failures.
    ///
    /// `errors` must hold at least one entry; the strategies only build an
    /// aggregate once a realm has actually failed, and an empty aggregate is
    /// a caller bug.
    pub fn new(errors: Vec<(String, AuthenticationError)>) -> Self {
        debug_assert!(
            !errors.is_empty(),
            "a multi-realm authentication error needs at least one realm failure"
        );
        Self { errors }
    }

    /// Every realm failure, in consultation order.
    pub fn realm_errors(&self) -> &[(String, AuthenticationError)] {
        &self.errors
    }

    /// The first realm failure recorded during the pass.
    pub fn first_error(&self) -> Option<&(String, AuthenticationError)> {
        self.errors.first()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for MultiRealmAuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication failed in {} realm(s)", self.errors.len())?;
        if let Some((realm, error)) = self.errors.first() {
            write!(f, "; first failure in realm [{realm}]: {error}")?;
        }
        Ok(())
    }
}

impl StdError for MultiRealmAuthenticationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.errors
            .first()
            .map(|(_, error)| error as &(dyn StdError + 'static))
    }
}
