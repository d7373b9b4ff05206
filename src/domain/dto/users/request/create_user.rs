//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `firstname` | 필수, 영문자만 |
//! | `lastname` | 필수, 영문자만 |
//! | `email` | 필수, 이메일 형식 |
//! | `age` | 필수, 1 이상 130 이하 정수 |
//!
//! 모든 필드는 `Option`으로 역직렬화됩니다. 누락된 필드는 JSON 파싱 에러가 아니라
//! `required` 검증 실패로 보고되고, 한 번의 검증에서 위반된 모든 필드가 수집됩니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use user_service_backend::domain::dto::users::request::CreateUserRequest;
//!
//! let request: CreateUserRequest = serde_json::from_str(
//!     r#"{"firstname":"Alice","lastname":"Smith","email":"alice@email.com","age":30}"#,
//! ).unwrap();
//!
//! let new_user = request.validated().unwrap();
//! assert_eq!(new_user.age, 30);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::NewUser;
use crate::validation::rules::{self, FieldChecks};
use crate::validation::RequestValidationError;

/// 허용되는 최소 나이
pub const MIN_AGE: i16 = 1;
/// 허용되는 최대 나이
pub const MAX_AGE: i16 = 130;

/// 사용자 생성 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "firstname": "Alice",
///   "lastname": "Smith",
///   "email": "alice@email.com",
///   "age": 30
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// 범위 밖의 값도 검증 단계까지 전달되도록 넓은 타입으로 받습니다.
    #[serde(default)]
    pub age: Option<i64>,
}

impl CreateUserRequest {
    /// 에러 출력 순서를 정하는 필드 선언 순서
    pub const FIELDS: &'static [&'static str] = &["firstname", "lastname", "email", "age"];

    /// 요청을 검증하고 도메인 입력으로 변환합니다.
    pub fn validated(&self) -> Result<NewUser, RequestValidationError> {
        let mut checks = FieldChecks::default();
        let new_user = check_profile(
            &mut checks,
            self.firstname.as_deref(),
            self.lastname.as_deref(),
            self.email.as_deref(),
            self.age,
        );

        checks
            .finish(new_user)
            .map_err(|errors| RequestValidationError::new(errors, Self::FIELDS))
    }
}

/// 이름, 성, 이메일, 나이 공통 규칙
///
/// 생성과 수정 요청이 같은 규칙을 공유합니다.
pub(crate) fn check_profile(
    checks: &mut FieldChecks,
    firstname: Option<&str>,
    lastname: Option<&str>,
    email: Option<&str>,
    age: Option<i64>,
) -> Option<NewUser> {
    let firstname = checks.check("firstname", rules::required(firstname).and_then(rules::alpha));
    let lastname = checks.check("lastname", rules::required(lastname).and_then(rules::alpha));
    let email = checks.check("email", rules::required(email).and_then(rules::email));
    let age = checks.check(
        "age",
        rules::required_value(age).and_then(|age| rules::range(age, MIN_AGE, MAX_AGE)),
    );

    let (Some(firstname), Some(lastname), Some(email), Some(age)) = (firstname, lastname, email, age) else {
        return None;
    };

    Some(NewUser {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        email: email.to_string(),
        age,
    })
}
