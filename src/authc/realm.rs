//! Realm collaborator contract.

use std::sync::Arc;

use async_trait::async_trait;

use super::{Account, AuthenticationError, AuthenticationToken};

/// An external credential store consulted during authentication.
///
/// Realms are opaque collaborators supplied by the embedder: LDAP directories,
/// relational databases, legacy identity services, and so on. The engine
/// calls [`supports`](Self::supports) first and skips realms that cannot
/// handle the submitted token type; only supporting realms are asked to
/// [`authenticate`](Self::authenticate).
///
/// `authenticate` distinguishes three outcomes:
///
/// - `Ok(Some(account))` — the realm authenticated the token.
/// - `Ok(None)` — the realm declined without raising an error (for example,
///   no account data exists for the submitted principal and the realm does
///   not treat that as a failure).
/// - `Err(error)` — the realm rejected the token. How the error combines
///   with other realms' outcomes is the strategy's decision.
///
/// Consultation may be slow (directory lookups, network round-trips); the
/// engine awaits each realm sequentially in attempt order and never retries,
/// parallelizes, or imposes timeouts.
#[async_trait]
pub trait Realm: Send + Sync {
    /// A stable name identifying this realm; used to key aggregated accounts
    /// and errors.
    fn name(&self) -> &str;

    /// Whether this realm can attempt authentication for the given token
    /// type.
    fn supports(&self, token: &dyn AuthenticationToken) -> bool;

    /// Attempt to authenticate the token against this realm's store.
    async fn authenticate(
        &self,
        token: &dyn AuthenticationToken,
    ) -> Result<Option<Arc<dyn Account>>, AuthenticationError>;
}
