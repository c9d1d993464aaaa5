//! Pluggable multi-realm authentication strategies.

mod all_successful;
mod at_least_one;
mod first_successful;

use std::sync::Arc;

use async_trait::async_trait;

pub use all_successful::AllRealmsSuccessful;
pub use at_least_one::AtLeastOneRealmSuccessful;
pub use first_successful::FirstRealmSuccessful;

use super::{Account, AuthenticationAttempt, AuthenticationError, CompositeAccount};

/// Policy combining multiple realms' authentication outcomes into one result.
///
/// Each [`execute`](Self::execute) call is a single stateless pass over the
/// attempt's realms, in attempt order, with [`Realm::supports`] gating every
/// consultation (unsupported realms are skipped and record nothing). The
/// three stock policies differ in how they treat per-realm errors and when
/// they stop:
///
/// | Strategy | On per-realm error | No success, errors exist | No success, no errors |
/// |---|---|---|---|
/// | [`FirstRealmSuccessful`] | record, continue | 1 error: re-raise as-is; more: aggregate | `Ok(None)` |
/// | [`AtLeastOneRealmSuccessful`] | record, continue | always aggregate (even a single error) | `Ok(None)` |
/// | [`AllRealmsSuccessful`] | propagate immediately, abort | n/a (aborts on the first error) | `Ok(None)` |
///
/// `Ok(None)` means the pass produced neither an account nor an error — no
/// realm supported the token, or every supporting realm declined without
/// raising. The two cases are deliberately indistinguishable here; the caller
/// decides what an account-less, error-less outcome means.
///
/// [`Realm::supports`]: super::Realm::supports
#[async_trait]
pub trait AuthenticationStrategy: Send + Sync {
    async fn execute(
        &self,
        attempt: &AuthenticationAttempt,
    ) -> Result<Option<Arc<dyn Account>>, AuthenticationError>;
}

/// Accumulates successful realm accounts over one pass.
///
/// The composite is built lazily: a lone success is returned as the realm's
/// own account, and only a second success promotes the aggregate to a
/// [`CompositeAccount`] holding both (and any later ones) in consultation
/// order.
pub(super) enum RealmSuccesses {
    None,
    Single {
        realm_name: String,
        account: Arc<dyn Account>,
    },
    Composite(CompositeAccount),
}

impl RealmSuccesses {
    pub(super) fn new() -> Self {
        Self::None
    }

    pub(super) fn record(&mut self, realm_name: &str, account: Arc<dyn Account>) {
        match self {
            Self::None => {
                *self = Self::Single {
                    realm_name: realm_name.to_string(),
                    account,
                };
            }
            Self::Single {
                realm_name: first_name,
                account: first_account,
            } => {
                let mut composite = CompositeAccount::new();
                composite.append_realm_account(first_name.clone(), Arc::clone(first_account));
                composite.append_realm_account(realm_name, account);
                *self = Self::Composite(composite);
            }
            Self::Composite(composite) => {
                composite.append_realm_account(realm_name, account);
            }
        }
    }

    pub(super) fn finish(self) -> Option<Arc<dyn Account>> {
        match self {
            Self::None => None,
            Self::Single { account, .. } => Some(account),
            Self::Composite(composite) => Some(Arc::new(composite)),
        }
    }
}
