//! # HTTP Handlers
//!
//! 요청을 해석하고 서비스 계층을 호출한 뒤 응답을 만드는 actix-web 핸들러 모음입니다.

pub mod users;
