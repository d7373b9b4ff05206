//! # 사용자 관리 서비스 구현
//!
//! 검증을 통과한 도메인 입력을 저장소 호출로 연결하고,
//! 저장소 에러를 작업별 HTTP 의미로 분류하는 얇은 계층입니다.
//!
//! ```text
//! Handler ──(NewUser / Uuid / UserUpdate)──▶ UserService ──▶ dyn UserRepository
//!                                                 │
//!                                                 └── 에러 분류
//!                                                     • 조회: 모든 실패 → NotFound (404)
//!                                                     • 생성/수정: 모든 실패 → 500
//! ```
//!
//! 각 메서드는 저장소를 정확히 한 번 호출하며 재시도하지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::{NewUser, User, UserUpdate};
use crate::repositories::users::UserRepository;

/// 사용자 관리 서비스
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 생성
    ///
    /// 서버에서 ID와 생성 시간을 부여한 뒤 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 저장된 사용자
    /// * `Err(AppError::DatabaseError)` - 저장 실패 (중복 이메일 포함)
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<UserResponse> {
        let start_time = Instant::now();
        let user = User::new(new_user);
        let id = user.id;

        let created = self.user_repo.create(user).await.map_err(|e| {
            warn!("사용자 생성 실패: {}", e);
            e.into_write_error()
        })?;

        info!("사용자 생성 완료: {} ({:?})", id, start_time.elapsed());
        Ok(UserResponse::from(created))
    }

    /// ID로 사용자 조회
    ///
    /// 행이 없거나 조회 자체가 실패한 경우 모두 `AppError::NotFound`를 반환합니다.
    pub async fn get_user(&self, id: Uuid) -> AppResult<UserResponse> {
        let user = self.user_repo.get_by_id(id).await.map_err(|e| {
            warn!("사용자 조회 실패: {} - {}", id, e);
            e.into_lookup_error()
        })?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 정보 수정
    ///
    /// 존재하지 않는 ID에 대한 수정은 저장소 실패로 취급되어 500으로 응답됩니다.
    pub async fn update_user(&self, update: UserUpdate) -> AppResult<UserResponse> {
        let id = update.id;

        let updated = self.user_repo.update(update).await.map_err(|e| {
            warn!("사용자 수정 실패: {} - {}", id, e);
            e.into_write_error()
        })?;

        info!("사용자 수정 완료: {}", id);
        Ok(UserResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::repositories::users::user_repo::MockUserRepository;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use mockall::predicate::eq;

    fn alice() -> NewUser {
        NewUser {
            firstname: "Alice".into(),
            lastname: "Smith".into(),
            email: "alice@email.com".into(),
            age: 30,
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_identity_and_calls_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user| user.firstname == "Alice" && user.age == 30)
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repo));
        let created = service.create_user(alice()).await.unwrap();

        assert_eq!(created.email, "alice@email.com");
        assert_eq!(created.id.get_version_num(), 4);
    }

    #[actix_web::test]
    async fn test_create_failure_is_server_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("duplicate key".into())));

        let service = UserService::new(Arc::new(repo));
        let err = service.create_user(alice()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_get_maps_every_failure_to_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("connection reset".into())));

        let service = UserService::new(Arc::new(repo));
        let err = service.get_user(id).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_server_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|update| Err(AppError::NotFound(format!("user {} not found", update.id))));

        let service = UserService::new(Arc::new(repo));
        let err = service
            .update_user(UserUpdate {
                id: Uuid::new_v4(),
                firstname: "Alice".into(),
                lastname: "Smith".into(),
                email: "alice@email.com".into(),
                age: 31,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
