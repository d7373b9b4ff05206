//! # 사용자 수정 요청 DTO
//!
//! `PATCH /user` 본문을 표현합니다. `id`는 필수이며 UUID 형식이어야 하고,
//! 나머지 필드는 생성 요청과 같은 규칙을 따릅니다.
//! 생성 시간 필드는 없으므로 클라이언트가 `created`를 보내더라도 무시됩니다.

use serde::{Deserialize, Serialize};

use super::create_user::check_profile;
use crate::domain::entities::users::UserUpdate;
use crate::validation::rules::{self, FieldChecks};
use crate::validation::RequestValidationError;

/// 사용자 수정 요청 DTO
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "firstname": "Alice",
///   "lastname": "Smith",
///   "email": "alice@email.com",
///   "age": 31
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl UpdateUserRequest {
    pub const FIELDS: &'static [&'static str] = &["id", "firstname", "lastname", "email", "age"];

    /// 요청을 검증하고 도메인 수정 입력으로 변환합니다.
    pub fn validated(&self) -> Result<UserUpdate, RequestValidationError> {
        let mut checks = FieldChecks::default();
        let id = checks.check("id", rules::required(self.id.as_deref()).and_then(rules::uuid));
        let profile = check_profile(
            &mut checks,
            self.firstname.as_deref(),
            self.lastname.as_deref(),
            self.email.as_deref(),
            self.age,
        );

        let update = id.zip(profile).map(|(id, profile)| UserUpdate {
            id,
            firstname: profile.firstname,
            lastname: profile.lastname,
            email: profile.email,
            age: profile.age,
        });

        checks
            .finish(update)
            .map_err(|errors| RequestValidationError::new(errors, Self::FIELDS))
    }
}
