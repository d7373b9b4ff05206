//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달하는 DTO를 정의합니다.
//!
//! ```json
//! {
//!   "id": "123e4567-e89b-12d3-a456-426614174000",
//!   "firstname": "Alice",
//!   "lastname": "Smith",
//!   "email": "alice@email.com",
//!   "age": 30,
//!   "created": "2024-05-01T12:00:00.123456Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
