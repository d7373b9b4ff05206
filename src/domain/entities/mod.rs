//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! PostgreSQL 테이블 행과 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: `sqlx::FromRow`로 `users` 테이블 행과 1:1 대응
//! - **직렬화/역직렬화**: JSON ↔ Rust 구조체 변환 지원
//!
//! ## 엔티티 설계 원칙
//!
//! 서버가 정하는 값(`id`, `created`)은 생성자에서만 채워지고,
//! 클라이언트 입력은 검증된 입력 타입([`users::NewUser`], [`users::UserUpdate`])을
//! 거쳐서만 엔티티에 도달합니다.

pub mod users;
