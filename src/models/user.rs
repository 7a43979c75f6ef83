use serde::{Deserialize, Serialize};

use super::Id;

/// Public profile of a registered user, as returned by `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_user() {
        let json = r#"{"email":"ada@example.com","name":"Ada","id":3}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new(3u64, "Ada", "ada@example.com"));
    }

    #[test]
    fn test_missing_name_defaults_to_empty() {
        let user: User = serde_json::from_str(r#"{"id":"u1","email":"x@y.z"}"#).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.id, Id::from("u1"));
    }
}
