//! Account types returned by realms.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Account data produced by a successful realm authentication.
///
/// Accounts are opaque to the authentication engine: strategies only collect
/// them, possibly wrapping several into a [`CompositeAccount`]. Embedders
/// downcast via [`as_any`](Self::as_any) to recover their concrete types.
pub trait Account: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A single realm's account: a principal plus free-form attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleAccount {
    principal: String,
    attributes: HashMap<String, String>,
}

impl SimpleAccount {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl Account for SimpleAccount {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An aggregated account spanning every realm that authenticated the same
/// token.
///
/// Entries are keyed by realm name and kept in first-seen order, which is the
/// order the realms were consulted in. The engine only *constructs*
/// composites; how principals or credentials across constituents merge is the
/// embedder's concern.
#[derive(Debug, Default)]
pub struct CompositeAccount {
    entries: Vec<(String, Arc<dyn Account>)>,
}

impl CompositeAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `account` as the outcome of the named realm. Appends in call
    /// order; an existing entry for the same realm is not replaced.
    pub fn append_realm_account(
        &mut self,
        realm_name: impl Into<String>,
        account: Arc<dyn Account>,
    ) {
        self.entries.push((realm_name.into(), account));
    }

    /// Realm names in consultation order.
    pub fn realm_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The account contributed by the named realm, if any.
    pub fn realm_account(&self, realm_name: &str) -> Option<&Arc<dyn Account>> {
        self.entries
            .iter()
            .find(|(name, _)| name == realm_name)
            .map(|(_, account)| account)
    }

    pub fn realm_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Account for CompositeAccount {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
