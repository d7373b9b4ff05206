//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 핸들러와 서비스는 [`UserRepository`] trait에만 의존하고,
//! 운영 환경에서는 PostgreSQL 구현체 [`PgUserRepository`]가 주입됩니다.
//!
//! ## 에러 처리
//!
//! | 상황 | 반환 |
//! |------|------|
//! | 해당 ID의 행 없음 | `AppError::NotFound` |
//! | 연결 실패, 쿼리 오류, 제약 조건 위반 | `AppError::DatabaseError` |
//!
//! 재시도는 하지 않습니다. 요청 future가 취소되면 진행 중인 쿼리도 함께 취소됩니다.

use async_trait::async_trait;
use log::debug;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{User, UserUpdate};

/// 사용자 저장소 계약
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 저장하고 저장된 행을 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// ID로 사용자를 조회합니다. 없으면 `NotFound`.
    async fn get_by_id(&self, id: Uuid) -> AppResult<User>;

    /// 이름, 성, 이메일, 나이를 갱신하고 저장된 행을 반환합니다.
    ///
    /// `id`와 `created`는 변경되지 않습니다. 해당 ID가 없으면 `NotFound`.
    async fn update(&self, update: UserUpdate) -> AppResult<User>;
}

/// PostgreSQL 사용자 리포지토리
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        debug!("사용자 저장: {}", user.id);

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, firstname, lastname, email, age, created)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, firstname, lastname, email, age, created
            "#,
        )
        .bind(user.id)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(user.age)
        .bind(user.created)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("failed to create user: {}", e)))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, age, created
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("failed to get a user: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))
    }

    async fn update(&self, update: UserUpdate) -> AppResult<User> {
        debug!("사용자 갱신: {}", update.id);

        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = $2,
                lastname = $3,
                email = $4,
                age = $5
            WHERE id = $1
            RETURNING id, firstname, lastname, email, age, created
            "#,
        )
        .bind(update.id)
        .bind(&update.firstname)
        .bind(&update.lastname)
        .bind(&update.email)
        .bind(update.age)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("failed to update user: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", update.id)))
    }
}
