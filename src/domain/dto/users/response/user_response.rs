use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// `created`는 RFC 3339 문자열로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i16,
    pub created: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            firstname,
            lastname,
            email,
            age,
            created,
        } = user;

        Self {
            id,
            firstname,
            lastname,
            email,
            age,
            created,
        }
    }
}
