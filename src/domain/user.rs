//! Session user record

use serde::{Deserialize, Serialize};

/// Identity of whoever is signed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// First word of the display name, used for greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let user = User::new("user-1", "Demo User", "demo@example.com");
        assert_eq!(user.first_name(), "Demo");

        let blank = User::new("user-2", "  ", "x@example.com");
        assert_eq!(blank.first_name(), "");
    }
}
