//! Multi-realm authentication engine.
//!
//! Authentication flows through three pieces:
//!
//! 1. The caller bundles a submitted [`AuthenticationToken`] with the ordered
//!    [`Realm`]s to consult into an immutable [`AuthenticationAttempt`].
//! 2. A chosen [`AuthenticationStrategy`] executes the attempt, consulting
//!    each supporting realm sequentially in attempt order.
//! 3. The strategy returns a single account — possibly a
//!    [`CompositeAccount`] spanning several realms — or raises an error,
//!    aggregated per the strategy's policy.
//!
//! Realms are external collaborators (directories, databases, legacy
//! services); the engine never retries them, runs them in parallel, or
//! imposes timeouts. See [`AuthenticationStrategy`] for the per-policy
//! failure semantics.

mod account;
mod attempt;
mod error;
mod realm;
mod strategy;
mod token;

pub use account::{Account, CompositeAccount, SimpleAccount};
pub use attempt::AuthenticationAttempt;
pub use error::{AuthenticationError, MultiRealmAuthenticationError};
pub use realm::Realm;
pub use strategy::{
    AllRealmsSuccessful, AtLeastOneRealmSuccessful, AuthenticationStrategy, FirstRealmSuccessful,
};
pub use token::{AuthenticationToken, UsernamePasswordToken};
