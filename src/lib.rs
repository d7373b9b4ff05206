//! 사용자 관리 서비스 백엔드
//!
//! 단일 "User" 엔티티의 생성, 조회, 수정을 제공하는 actix-web 기반 서비스입니다.
//! 요청 검증 실패는 필드 단위의 안정적인 에러 계약(`{"errors": [{field, message}]}`)으로
//! 변환되며, 메시지 언어는 설정으로 선택합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성(`POST /user`), 조회(`GET /user/{id}`), 수정(`PATCH /user`)
//! - **요청 검증**: 위반된 모든 필드를 한 번에 보고
//! - **메시지 지역화**: 영어(기본), 러시아어
//! - **PostgreSQL**: sqlx 연결 풀과 내장 마이그레이션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 추출기 에러 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 해석/검증, 응답 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 도메인 매핑, 에러 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::db::Database;
//! use user_service_backend::repositories::users::PgUserRepository;
//! use user_service_backend::services::users::UserService;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let repo = Arc::new(PgUserRepository::new(database.pool().clone()));
//! let service = UserService::new(repo);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod validation;
