use serde::{Deserialize, Serialize};

/// An administrator account seeded at initialization.
///
/// The password is stored as a lowercase hex SHA-256 digest; there is no
/// per-user salt, matching the seeded credential format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
