//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 요청 제한, CORS, 메시지 언어 설정
//!
//! ## 환경 파일
//!
//! `main`에서 `PROFILE` 값에 따라 `.env.dev`, `.env.prod`, `.env` 중 하나를 먼저 로드합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let bind_address = ServerConfig::bind_address();
//! ```

pub mod data_config;

pub use data_config::*;
