//! Palisade is an embeddable authentication and authorization core.
//!
//! It provides two independent subsystems:
//!
//! - [`authz`] — wildcard permission matching. A granted permission string such
//!   as `"newsletter:edit,view:*"` is parsed into a [`authz::WildcardPermission`]
//!   and checked against a requested permission with
//!   [`authz::WildcardPermission::implies`].
//! - [`authc`] — multi-realm authentication. A submitted token and an ordered
//!   set of [`authc::Realm`] credential stores are bundled into an
//!   [`authc::AuthenticationAttempt`] and handed to a pluggable
//!   [`authc::AuthenticationStrategy`], which decides how the per-realm
//!   outcomes combine into a single account or failure.
//!
//! Palisade does not bind to any transport, session store, or credential
//! hashing scheme. Realms are opaque collaborators supplied by the embedder;
//! the engine only sequences them and aggregates their results.

pub mod authc;
pub mod authz;
