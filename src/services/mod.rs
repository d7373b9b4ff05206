//! # Service Layer
//!
//! 핸들러와 저장소 사이의 비즈니스 계층입니다.

pub mod users;
