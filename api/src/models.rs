use std::fmt;

use serde::{Deserialize, Serialize};

/// Administrative view of an account, as the admin API returns it.
///
/// The server owns these records; the client keeps a transient roster copy
/// that is replaced wholesale on load and patched per row from mutation
/// responses (see [`crate::roster`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_blocked: bool,
}

/// Account role. The wire constants are `"ADMIN"` and `"USER"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    User,
}

impl UserRole {
    /// All roles, in the order the role select shows them.
    pub const ALL: [UserRole; 2] = [UserRole::Admin, UserRole::User];

    /// The wire constant for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }

    /// Parse a wire constant. Anything unrecognized falls back to `User`,
    /// the role with the fewest privileges.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ADMIN" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_the_api_payload() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 7,
                "firstName": "Anna",
                "lastName": "Schmidt",
                "email": "anna@example.com",
                "role": "ADMIN",
                "isBlocked": false
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Anna");
        assert_eq!(user.last_name, "Schmidt");
        assert_eq!(user.role, UserRole::Admin);
        assert!(!user.is_blocked);
    }

    #[test]
    fn role_wire_constants_round_trip() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_wire(role.as_str()), role);
        }
        assert_eq!(UserRole::from_wire("SUPERVISOR"), UserRole::User);
    }
}
