//! 필드 제약 조건 술어(predicate)
//!
//! 각 술어는 단일 값을 검사하고, 실패하면 제약 조건 코드와 입력값(`value` 파라미터)을
//! 담은 [`ValidationError`]를 반환합니다. 요청 타입은 이 술어들을 조합해
//! [`FieldChecks`]에 모든 실패를 수집합니다.
//!
//! ```rust
//! use user_service_backend::validation::rules::{self, FieldChecks};
//!
//! let mut checks = FieldChecks::default();
//! let name = checks.check("firstname", rules::required(Some("1234")).and_then(rules::alpha));
//! assert!(checks.finish(name).is_err());
//! ```

use std::borrow::Cow;

use serde::Serialize;
use uuid::Uuid;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use super::messages::{CODE_ALPHA, CODE_EMAIL, CODE_MAX, CODE_MIN, CODE_REQUIRED, CODE_UUID};

/// 메시지 템플릿에 치환될 입력값 파라미터 이름
pub const VALUE_PARAM: &str = "value";

/// 정규 UUID 문자열 길이 (8-4-4-4-12)
const HYPHENATED_UUID_LEN: usize = 36;

fn failure<T: Serialize>(code: &'static str, value: &T) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.add_param(Cow::Borrowed(VALUE_PARAM), value);
    error
}

/// 문자열 필수 값 검사. `None`과 빈 문자열은 누락으로 처리합니다.
pub fn required(value: Option<&str>) -> Result<&str, ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::new(CODE_REQUIRED)),
    }
}

/// 숫자 등 문자열이 아닌 필수 값 검사
pub fn required_value<T: Copy>(value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(CODE_REQUIRED))
}

/// ASCII 영문자만 허용합니다.
pub fn alpha(value: &str) -> Result<&str, ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(value)
    } else {
        Err(failure(CODE_ALPHA, &value))
    }
}

/// 이메일 형식 검사 (HTML5 / validator 크레이트 규칙)
pub fn email(value: &str) -> Result<&str, ValidationError> {
    if value.validate_email() {
        Ok(value)
    } else {
        Err(failure(CODE_EMAIL, &value))
    }
}

/// 닫힌 구간 `[min, max]` 검사
///
/// 하한 미달은 `min`, 상한 초과는 `max` 코드로 보고되며 통과한 값은 `i16`으로 좁혀집니다.
pub fn range(value: i64, min: i16, max: i16) -> Result<i16, ValidationError> {
    if value < i64::from(min) {
        return Err(failure(CODE_MIN, &value));
    }
    if value > i64::from(max) {
        return Err(failure(CODE_MAX, &value));
    }
    i16::try_from(value).map_err(|_| failure(CODE_MAX, &value))
}

/// 하이픈이 포함된 정규 UUID 표기인지 검사하고 파싱합니다.
pub fn uuid(value: &str) -> Result<Uuid, ValidationError> {
    if value.len() != HYPHENATED_UUID_LEN {
        return Err(failure(CODE_UUID, &value));
    }
    Uuid::try_parse(value).map_err(|_| failure(CODE_UUID, &value))
}

/// 한 번의 검증 과정에서 발생한 필드별 실패를 모두 수집합니다.
///
/// [`FieldChecks::check`]는 실패를 기록했을 때에만 `None`을 반환하므로,
/// 모든 결과가 `Some`이면 수집된 에러가 없다는 것이 보장됩니다.
#[derive(Debug)]
pub struct FieldChecks {
    errors: ValidationErrors,
}

impl Default for FieldChecks {
    fn default() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }
}

impl FieldChecks {
    /// 검사 결과를 기록하고 통과한 값을 돌려줍니다.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.add(field, error);
                None
            }
        }
    }

    /// 실패가 없고 변환된 값이 있으면 그 값을, 아니면 수집된 에러를 반환합니다.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}
