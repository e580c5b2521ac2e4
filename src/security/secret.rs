//! Secret values held in memory.

use std::fmt;

/// A string that must never reach logs or clients.
///
/// `Debug` is masked; the value is only reachable through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `None` for the empty string.
    pub fn non_empty(value: String) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Masked presence marker for logs: `"***"` when a value was supplied.
pub fn presence(present: bool) -> &'static str {
    if present {
        "***"
    } else {
        "none"
    }
}
