//! User domain model

use serde::{Deserialize, Serialize};

/// Identifier of a user row in the backing store
pub type UserId = i64;

/// A stored user with a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(42, "Alice");
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Alice");
    }
}
