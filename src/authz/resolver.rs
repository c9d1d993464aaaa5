//! Permission string resolution.

use super::{AuthzError, WildcardPermission};

/// Turns permission strings into [`WildcardPermission`] instances.
///
/// The resolver carries a single piece of configuration: whether resolved
/// permissions preserve case. The default is case-insensitive, matching the
/// common convention of lower-cased permission strings.
///
/// The flag is read at resolve time, so toggling it affects subsequent
/// resolutions only. The resolver is not safe for concurrent flag mutation;
/// once the flag is stable, concurrent read-only resolution is safe.
#[derive(Debug, Clone, Default)]
pub struct WildcardPermissionResolver {
    case_sensitive: bool,
}

impl WildcardPermissionResolver {
    /// A case-insensitive resolver (the default).
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver with an explicit case-sensitivity mode.
    pub fn case_sensitive(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Parse `text` into a permission using the configured case mode.
    pub fn resolve_permission(&self, text: &str) -> Result<WildcardPermission, AuthzError> {
        WildcardPermission::parse(text, self.case_sensitive)
    }
}
