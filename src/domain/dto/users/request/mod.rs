//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 경로 파라미터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 본문은 JSON 객체여야 하며 필드 타입이 일치해야 함 (실패 시 `{"error": ...}`)
//! 2. **필드 검증**: 필수 여부, 영문자, 이메일, 범위, UUID 형식 (실패 시 `{"errors": [...]}`)
//!
//! 필드 검증을 통과한 요청만 도메인 입력(`NewUser`, `UserUpdate`, `Uuid`)으로 변환됩니다.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub mod create_user;
pub mod get_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use get_user::GetUserRequest;
pub use update_user::UpdateUserRequest;

/// 요청 본문으로 허용되는 JSON 객체
pub type JsonObject = Map<String, Value>;

/// JSON 객체를 요청 DTO로 변환합니다.
///
/// 구조체 역직렬화는 배열도 위치 순서로 받아들이므로, 본문은 먼저 객체로 추출한 뒤 변환합니다.
pub fn from_object<T: DeserializeOwned>(object: JsonObject) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_fields_are_matched_by_name() {
        let object = json!({"age": 30, "firstname": "Alice"});
        let Value::Object(object) = object else {
            panic!("object literal");
        };

        let request: CreateUserRequest = from_object(object).unwrap();
        assert_eq!(request.firstname.as_deref(), Some("Alice"));
        assert_eq!(request.age, Some(30));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_array_is_not_an_object() {
        assert!(serde_json::from_value::<JsonObject>(json!(["Alice", "Smith", "alice@email.com", 30])).is_err());
        assert!(serde_json::from_value::<JsonObject>(json!([])).is_err());
    }

    #[test]
    fn test_wrong_field_type_fails_conversion() {
        let Value::Object(object) = json!({"age": "thirty"}) else {
            panic!("object literal");
        };
        assert!(from_object::<CreateUserRequest>(object).is_err());
    }
}
