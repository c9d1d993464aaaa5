//! Authentication token abstraction.

use std::any::Any;
use std::fmt;

/// An opaque credential bundle submitted during a log-in attempt.
///
/// The authentication engine never introspects tokens; it only passes them
/// through to realms. Realms use [`as_any`](Self::as_any) to downcast to the
/// concrete token types they support.
pub trait AuthenticationToken: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// The stock principal/credential pair for interactive log-ins.
#[derive(Clone)]
pub struct UsernamePasswordToken {
    username: String,
    password: String,
}

impl UsernamePasswordToken {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for UsernamePasswordToken {
    /// The password never appears in debug or log output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsernamePasswordToken")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AuthenticationToken for UsernamePasswordToken {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
