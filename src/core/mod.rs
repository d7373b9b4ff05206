//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 에러 타입과 결과 타입 별칭을 제공합니다.

pub mod errors;

pub use errors::*;
