//! 메모리 기반 사용자 리포지토리
//!
//! 데이터베이스 없이 핸들러와 서비스를 검증할 때 사용하는 구현체입니다.
//! 호출 횟수를 기록하므로 "요청당 저장소 호출 한 번"을 확인할 수 있습니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::user_repo::UserRepository;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{User, UserUpdate};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지의 저장소 호출 횟수
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn poisoned() -> AppError {
        AppError::DatabaseError("in-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.record_call();
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::DatabaseError(format!(
                "failed to create user: duplicate email {}",
                user.email
            )));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.record_call();
        let users = self.users.read().map_err(|_| Self::poisoned())?;

        users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))
    }

    async fn update(&self, update: UserUpdate) -> AppResult<User> {
        self.record_call();
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        let stored = users
            .get_mut(&update.id)
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", update.id)))?;

        *stored = stored.with_update(&update);
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::NewUser;

    fn alice() -> User {
        User::new(NewUser {
            firstname: "Alice".into(),
            lastname: "Smith".into(),
            email: "alice@email.com".into(),
            age: 30,
        })
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let repo = InMemoryUserRepository::new();
        let user = alice();

        let created = repo.create(user.clone()).await.unwrap();
        assert_eq!(created, user);
        assert_eq!(repo.get_by_id(user.id).await.unwrap(), user);
        assert_eq!(repo.calls(), 2);
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(alice()).await.unwrap();

        let err = repo.create(alice()).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[actix_web::test]
    async fn test_unknown_id() {
        let repo = InMemoryUserRepository::new();
        assert!(matches!(
            repo.get_by_id(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));

        let update = UserUpdate {
            id: Uuid::new_v4(),
            firstname: "Bob".into(),
            lastname: "Jones".into(),
            email: "bob@email.com".into(),
            age: 40,
        };
        assert!(matches!(repo.update(update).await, Err(AppError::NotFound(_))));
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_update_preserves_id_and_created() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(alice()).await.unwrap();

        let updated = repo
            .update(UserUpdate {
                id: user.id,
                firstname: "Alicia".into(),
                lastname: "Smith".into(),
                email: "alicia@email.com".into(),
                age: 31,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.created, user.created);
        assert_eq!(updated.firstname, "Alicia");
        assert_eq!(repo.get_by_id(user.id).await.unwrap(), updated);
    }
}
