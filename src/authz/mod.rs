//! Authorization module providing wildcard permission matching.
//!
//! An authorization check constructs two [`WildcardPermission`] instances —
//! the granted permission and the requested one — and asks whether the grant
//! [`implies`](WildcardPermission::implies) the request:
//!
//! ```
//! use palisade::authz::WildcardPermissionResolver;
//!
//! let resolver = WildcardPermissionResolver::new();
//! let granted = resolver.resolve_permission("newsletter:*").unwrap();
//! let requested = resolver.resolve_permission("newsletter:read").unwrap();
//! assert!(granted.implies(&requested));
//! ```
//!
//! Permissions are parsed on demand per check and never cached here; caching,
//! if any, is the embedder's concern.

mod error;
mod permission;
mod resolver;

pub use error::AuthzError;
pub use permission::WildcardPermission;
pub use resolver::WildcardPermissionResolver;
