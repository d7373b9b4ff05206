//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 테이블의 한 행과 1:1로 대응합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// `id`와 `created`는 생성 시 서버에서 한 번만 정해지며 이후 변경되지 않습니다.
/// 이름, 이메일, 나이는 업데이트로만 변경됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// 서버에서 생성한 v4 UUID
    pub id: Uuid,
    /// 이름 (영문자만)
    pub firstname: String,
    /// 성 (영문자만)
    pub lastname: String,
    /// 이메일 주소 (unique)
    pub email: String,
    /// 나이 (1..=130)
    pub age: i16,
    /// 생성 시간
    pub created: DateTime<Utc>,
}

/// 검증을 통과한 사용자 생성 입력
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i16,
}

/// 검증을 통과한 사용자 수정 입력
///
/// 생성 시간은 포함되지 않으므로 요청으로 `created`를 바꿀 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i16,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 새 ID와 현재 시각을 부여합니다.
    pub fn new(new_user: NewUser) -> Self {
        let NewUser {
            firstname,
            lastname,
            email,
            age,
        } = new_user;

        Self {
            id: Uuid::new_v4(),
            firstname,
            lastname,
            email,
            age,
            created: Utc::now(),
        }
    }

    /// 수정 입력을 반영한 사본을 반환합니다. `id`와 `created`는 유지됩니다.
    pub fn with_update(&self, update: &UserUpdate) -> Self {
        Self {
            id: self.id,
            firstname: update.firstname.clone(),
            lastname: update.lastname.clone(),
            email: update.email.clone(),
            age: update.age,
            created: self.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> NewUser {
        NewUser {
            firstname: "Alice".into(),
            lastname: "Smith".into(),
            email: "alice@email.com".into(),
            age: 30,
        }
    }

    #[test]
    fn test_new_user_gets_fresh_identity() {
        let first = User::new(alice());
        let second = User::new(alice());

        assert_ne!(first.id, second.id);
        assert_eq!(first.id.get_version_num(), 4);
        assert_eq!(first.firstname, "Alice");
        assert_eq!(first.age, 30);
        assert!(first.created <= Utc::now());
    }

    #[test]
    fn test_update_keeps_id_and_created() {
        let user = User::new(alice());
        let update = UserUpdate {
            id: Uuid::new_v4(),
            firstname: "Bob".into(),
            lastname: "Jones".into(),
            email: "bob@email.com".into(),
            age: 41,
        };

        let updated = user.with_update(&update);
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.created, user.created);
        assert_eq!(updated.firstname, "Bob");
        assert_eq!(updated.email, "bob@email.com");
        assert_eq!(updated.age, 41);
    }

    #[test]
    fn test_serialized_field_names() {
        let user = User::new(alice());
        let value = serde_json::to_value(&user).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "firstname", "lastname", "email", "age", "created"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 6);
    }
}
