//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`] - 저장된 사용자 (id, 이름, 이메일, 나이, 생성 시간)
//! - [`NewUser`] - 검증을 통과한 생성 입력
//! - [`UserUpdate`] - 검증을 통과한 수정 입력
//!
//! # 사용 예제
//!
//! ```rust
//! use user_service_backend::domain::entities::users::{NewUser, User};
//!
//! let user = User::new(NewUser {
//!     firstname: "Alice".into(),
//!     lastname: "Smith".into(),
//!     email: "alice@email.com".into(),
//!     age: 30,
//! });
//! assert_eq!(user.firstname, "Alice");
//! ```

pub mod user;

pub use user::{NewUser, User, UserUpdate};
