//! 사용자 조회 요청 DTO
//!
//! `GET /user/{id}`의 경로 파라미터를 표현합니다.
//! 경로 세그먼트는 문자열로 받아 검증 단계에서 UUID로 변환하므로,
//! 잘못된 ID도 `id` 필드 에러로 보고됩니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::rules::{self, FieldChecks};
use crate::validation::RequestValidationError;

/// 사용자 조회 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserRequest {
    pub id: String,
}

impl GetUserRequest {
    pub const FIELDS: &'static [&'static str] = &["id"];

    /// ID를 검증하고 UUID로 변환합니다.
    pub fn validated(&self) -> Result<Uuid, RequestValidationError> {
        let mut checks = FieldChecks::default();
        let id = checks.check("id", rules::required(Some(self.id.as_str())).and_then(rules::uuid));

        checks
            .finish(id)
            .map_err(|errors| RequestValidationError::new(errors, Self::FIELDS))
    }
}
