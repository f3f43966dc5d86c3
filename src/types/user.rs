//! User identification for pull request authors

use serde::{Deserialize, Serialize};

/// Login GitHub reports for pull requests whose author account was deleted
pub const GHOST_LOGIN: &str = "ghost";

/// User identifier wrapper type for GitHub logins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User(String);

impl User {
    /// Creates a new User with the specified login
    pub fn new(login: String) -> Self {
        Self(login)
    }

    /// Placeholder author used when the API returns a null author
    pub fn ghost() -> Self {
        Self(GHOST_LOGIN.to_string())
    }

    /// Get the login as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for User {
    fn from(s: &str) -> Self {
        User::new(s.to_string())
    }
}

impl From<String> for User {
    fn from(s: String) -> Self {
        User::new(s)
    }
}

impl PartialEq<&str> for User {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
