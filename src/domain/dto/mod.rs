//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! | 역할 | 모듈 |
//! |------|------|
//! | HTTP 요청 본문/경로 매핑 및 검증 | `users::request` |
//! | HTTP 응답 본문 매핑 | `users::response` |
//!
//! 내부 엔티티와 API 표현을 분리하여, 저장 구조가 바뀌어도 응답 계약이 유지되도록 합니다.

pub mod users;
