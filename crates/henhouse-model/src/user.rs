// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Farmer,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Farmer => "farmer",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "farmer" => Some(Self::Farmer),
            _ => None,
        }
    }
}

/// `password_hash` never leaves the process: it is skipped on serialization
/// so every user-shaped response is already safe to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@poultrymanager.com".to_string(),
            password_hash: "secret".to_string(),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            phone: None,
            role: Role::Admin,
            is_active: true,
            created_at: String::new(),
        };
        let value = serde_json::to_value(&user).expect("serialize user");
        assert!(value.get("passwordHash").is_none());
        assert_eq!(value["role"], "admin");
    }
}
