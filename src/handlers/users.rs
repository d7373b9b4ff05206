//! # User Management HTTP Handlers
//!
//! 사용자 생성, 조회, 수정 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/user` | 새 사용자 생성 | 202 Accepted |
//! | `GET` | `/user/{id}` | 사용자 조회 | 202 Accepted |
//! | `PATCH` | `/user` | 사용자 정보 수정 | 200 OK |
//!
//! ## 요청 처리 단계
//!
//! ```text
//! received → decoded → validated → domain-mapped → repository-call → responded
//! ```
//!
//! - **decoded**: 본문은 JSON 객체로만 추출됩니다. 파싱 실패나 배열 본문은 `JsonConfig` 에러 핸들러에서,
//!   필드 타입 불일치는 객체 변환 단계에서 `{"error": ...}` 400으로 끝납니다.
//! - **validated**: 필드 검증 실패는 `{"errors": [...]}` 400으로 끝나며 저장소는 호출되지 않습니다.
//! - **repository-call**: 유효한 요청마다 정확히 한 번 호출됩니다.
//!
//! 검증 메시지 언어는 `web::Data<Locale>`로 주입됩니다.

use actix_web::{get, patch, post, web, HttpResponse};
use log::debug;
use serde::de::DeserializeOwned;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{
    from_object, CreateUserRequest, GetUserRequest, JsonObject, UpdateUserRequest,
};
use crate::services::users::UserService;
use crate::validation::Locale;

/// 새 사용자 생성
///
/// 성공 시 202 Accepted와 함께 저장된 사용자를 반환합니다.
#[post("/user")]
pub async fn create_user(
    payload: web::Json<JsonObject>,
    service: web::Data<UserService>,
    locale: web::Data<Locale>,
) -> Result<HttpResponse, AppError> {
    let request: CreateUserRequest = decode(payload)?;
    let new_user = request.validated().map_err(|e| {
        debug!("사용자 생성 요청 검증 실패: {}", e);
        AppError::from_request_error(&e, *locale.get_ref())
    })?;

    let user = service.create_user(new_user).await?;

    Ok(HttpResponse::Accepted().json(user))
}

/// ID로 사용자 조회
///
/// 잘못된 형식의 ID는 `id` 필드 에러(400), 존재하지 않거나 조회에 실패하면 404입니다.
#[get("/user/{id}")]
pub async fn get_user(
    path: web::Path<GetUserRequest>,
    service: web::Data<UserService>,
    locale: web::Data<Locale>,
) -> Result<HttpResponse, AppError> {
    let id = path.validated().map_err(|e| {
        debug!("사용자 조회 요청 검증 실패: {}", e);
        AppError::from_request_error(&e, *locale.get_ref())
    })?;

    let user = service.get_user(id).await?;

    Ok(HttpResponse::Accepted().json(user))
}

/// 사용자 정보 수정
///
/// 본문의 `id`로 대상을 지정합니다. `id`와 `created`는 변경되지 않습니다.
#[patch("/user")]
pub async fn update_user(
    payload: web::Json<JsonObject>,
    service: web::Data<UserService>,
    locale: web::Data<Locale>,
) -> Result<HttpResponse, AppError> {
    let request: UpdateUserRequest = decode(payload)?;
    let update = request.validated().map_err(|e| {
        debug!("사용자 수정 요청 검증 실패: {}", e);
        AppError::from_request_error(&e, *locale.get_ref())
    })?;

    let user = service.update_user(update).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 추출된 JSON 객체를 요청 DTO로 변환합니다. 타입 불일치는 `DecodeError`입니다.
fn decode<T: DeserializeOwned>(payload: web::Json<JsonObject>) -> Result<T, AppError> {
    from_object(payload.into_inner()).map_err(|e| {
        debug!("요청 본문 변환 실패: {}", e);
        AppError::DecodeError(e.to_string())
    })
}
