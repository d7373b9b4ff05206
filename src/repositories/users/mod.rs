//! 사용자 저장소 모듈
//!
//! - [`user_repo`] - 저장소 trait과 PostgreSQL 구현체
//! - `memory_repo` - 핸들러 테스트용 메모리 구현체

#[cfg(test)]
pub mod memory_repo;
pub mod user_repo;

#[cfg(test)]
pub use memory_repo::InMemoryUserRepository;
pub use user_repo::{PgUserRepository, UserRepository};
