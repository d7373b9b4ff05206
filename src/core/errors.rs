//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 에러는 `AppError`로 모이고, `actix_web::ResponseError` 구현을 통해
//! 일관된 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 본문 | 사용 시나리오 |
//! |----------|-------------|------|---------------|
//! | `DecodeError` | 400 Bad Request | `{"error": ...}` | JSON 파싱 실패, 타입 불일치 |
//! | `ValidationError` | 400 Bad Request | `{"errors": [...]}` | 필드 검증 실패 |
//! | `NotFound` | 404 Not Found | `{"error": ...}` | 사용자 없음 |
//! | `DatabaseError` | 500 Internal Server Error | `{"error": ...}` | 저장소 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn get_user(path: web::Path<GetUserRequest>, locale: web::Data<Locale>) -> Result<HttpResponse, AppError> {
//!     let id = path
//!         .validated()
//!         .map_err(|e| AppError::from_request_error(&e, *locale.get_ref()))?;
//!     // ...
//! }
//! ```

use std::error::Error as StdError;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::validation::{field_errors, FieldError, Locale};

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문/경로를 해석할 수 없음
    ///
    /// 잘못된 JSON, 필드 타입 불일치, 지원하지 않는 Content-Type 등
    /// 필드 단위로 표현할 수 없는 실패입니다.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 필드 단위 검증 실패
    ///
    /// 이미 선택된 언어로 렌더링된 `{field, message}` 목록을 담습니다.
    #[error("Validation error: {} invalid field(s)", .0.len())]
    ValidationError(Vec<FieldError>),

    /// 리소스 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러
    ///
    /// 연결 실패, 쿼리 오류, 제약 조건 위반 등 저장소 연산 중 발생하는 오류입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AppError {
    /// 요청 해석/검증 에러를 분류합니다.
    ///
    /// 필드 단위 검증 실패면 `ValidationError`, 그 밖의 모든 에러는 `DecodeError`가 됩니다.
    pub fn from_request_error(error: &(dyn StdError + 'static), locale: Locale) -> Self {
        match field_errors(error, locale) {
            Some(fields) => AppError::ValidationError(fields),
            None => AppError::DecodeError(error.to_string()),
        }
    }

    /// 조회 실패는 원인과 관계없이 404로 응답합니다.
    pub fn into_lookup_error(self) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::NotFound(other.to_string()),
        }
    }

    /// 쓰기 실패는 원인과 관계없이 500으로 응답합니다.
    ///
    /// 존재하지 않는 ID에 대한 수정도 저장소 실패로 취급됩니다.
    pub fn into_write_error(self) -> Self {
        match self {
            AppError::DatabaseError(msg) => AppError::DatabaseError(msg),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DecodeError(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 필드 검증 실패는 `{"errors": [{field, message}, ...]}`,
    /// 나머지는 `{"error": "..."}` 형식을 따릅니다.
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::ValidationError(fields) => builder.json(serde_json::json!({
                "errors": fields
            })),
            _ => builder.json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
