//! Bearer credential carrier for API calls
//!
//! Callers pass the token explicitly to every operation; the client never
//! reads credentials from shared state.

use std::fmt;

/// Opaque bearer token for the platform API
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AuthToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// Tokens must not leak into logs
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let token = AuthToken::new("secret-jwt");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
    }
}
