//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 엔티티와 API 데이터 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 핵심 비즈니스 객체 (users 테이블 행)
//! └── DTOs      - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
