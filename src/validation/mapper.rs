//! 검증 에러 매퍼
//!
//! 요청 처리 중 발생한 에러가 필드 단위 검증 실패인지 판별하고,
//! 그렇다면 필드 선언 순서대로 정렬된 `{field, message}` 목록으로 변환합니다.
//! JSON 파싱 실패처럼 구조적인 에러는 `None`을 반환하여
//! 호출자가 일반 에러 응답(`{"error": ...}`)으로 처리하도록 합니다.
//!
//! ```rust
//! use user_service_backend::domain::dto::users::request::CreateUserRequest;
//! use user_service_backend::validation::{field_errors, Locale};
//!
//! let request = CreateUserRequest {
//!     firstname: Some("1234".into()),
//!     lastname: Some("Smith".into()),
//!     email: Some("alice@email.com".into()),
//!     age: Some(30),
//! };
//! let error = request.validated().unwrap_err();
//! let fields = field_errors(&error, Locale::En).unwrap();
//!
//! assert_eq!(fields[0].field, "firstname");
//! assert_eq!(fields[0].message, "only letters allowed — 1234");
//! ```

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

use super::messages::Locale;
use super::rules::VALUE_PARAM;

/// 클라이언트에게 전달되는 단일 필드 에러
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 요청 타입 하나에 대한 필드 검증 실패
///
/// `validator::ValidationErrors`는 필드 순서를 보존하지 않으므로
/// 요청 타입이 선언한 필드 순서를 함께 보관합니다.
#[derive(Debug, Error)]
#[error("request validation failed: {errors}")]
pub struct RequestValidationError {
    errors: ValidationErrors,
    fields: &'static [&'static str],
}

impl RequestValidationError {
    pub fn new(errors: ValidationErrors, fields: &'static [&'static str]) -> Self {
        Self { errors, fields }
    }

    /// 필드 선언 순서대로 정렬된 에러 목록을 주어진 언어로 만듭니다.
    ///
    /// 선언 목록에 없는 필드는 이름순으로 뒤에 붙습니다.
    /// 한 필드에 여러 실패가 있으면 기록된 순서대로 모두 포함됩니다.
    pub fn to_field_errors(&self, locale: Locale) -> Vec<FieldError> {
        let by_field = self.errors.field_errors();

        let mut undeclared: Vec<String> = by_field
            .keys()
            .map(|key| key.to_string())
            .filter(|key| !self.fields.contains(&key.as_str()))
            .collect();
        undeclared.sort();

        let ordered = self
            .fields
            .iter()
            .map(|field| field.to_string())
            .chain(undeclared);

        let mut out = Vec::new();
        for field in ordered {
            let Some(errors) = by_field.get(field.as_str()) else {
                continue;
            };
            for error in errors.iter() {
                out.push(FieldError {
                    field: field.clone(),
                    message: locale.render(&error.code, error.params.get(VALUE_PARAM)),
                });
            }
        }
        out
    }
}

/// 에러가 필드 단위 검증 실패라면 필드 에러 목록을, 아니면 `None`을 반환합니다.
pub fn field_errors(error: &(dyn StdError + 'static), locale: Locale) -> Option<Vec<FieldError>> {
    let validation = error.downcast_ref::<RequestValidationError>()?;
    let fields = validation.to_field_errors(locale);
    if fields.is_empty() { None } else { Some(fields) }
}
