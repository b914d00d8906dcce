use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as held by the repository.
///
/// The id is assigned by the caller before the entity ever reaches the
/// service; the service never touches either field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
}

/// Request payload for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
}

/// User data returned in API responses.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
        }
    }
}
