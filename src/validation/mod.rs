//! # 요청 검증 및 에러 정규화 계층
//!
//! 클라이언트 입력을 검증하고, 검증 실패를 안정적인 필드 단위 에러 계약으로 변환합니다.
//!
//! ## 구성
//!
//! - [`rules`] - 조합 가능한 제약 조건 술어 (required, alpha, email, range, uuid)
//! - [`messages`] - 제약 조건 코드 → 로컬라이즈된 메시지 템플릿
//! - [`mapper`] - 검증 실패 → `[{field, message}]` 변환
//!
//! ## 에러 응답 계약
//!
//! ```json
//! {
//!   "errors": [
//!     { "field": "firstname", "message": "only letters allowed — 1234" },
//!     { "field": "age", "message": "too much — 200" }
//!   ]
//! }
//! ```
//!
//! 한 번의 검증에서 위반된 모든 필드를 보고하며, 첫 번째 실패에서 멈추지 않습니다.

pub mod mapper;
pub mod messages;
pub mod rules;

pub use mapper::{field_errors, FieldError, RequestValidationError};
pub use messages::Locale;
