//! Account Directory HTTP Handlers
//!
//! 계정 디렉터리 조회와 역할 관리 엔드포인트입니다. 게이트웨이는 계정
//! 데이터를 보유하지 않으므로 모든 응답은 계정 원장 서비스의 상태를
//! 일시적으로 투영한 것입니다.

use actix_web::{get, patch, web, HttpResponse};
use validator::Validate;

use crate::domain::ChangeRoleForm;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 전체 계정 목록 조회 핸들러
///
/// 빈 디렉터리는 빈 배열입니다. 조회 실패는 Outcome 본문에 담겨 200으로
/// 반환됩니다.
///
/// # Endpoint
/// `GET /accounts`
#[get("")]
pub async fn list_accounts() -> Result<HttpResponse, AppError> {
    let auth_service = AuthService::instance();
    let result = auth_service.list_accounts().await;

    Ok(HttpResponse::Ok().json(result))
}

/// 계정 단건 조회 핸들러
///
/// 실패한 Outcome은 404로 매핑됩니다.
///
/// # Endpoint
/// `GET /accounts/{user_id}`
#[get("/{user_id}")]
pub async fn get_account(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let auth_service = AuthService::instance();
    let result = auth_service.get_account(&user_id).await;

    if !result.succeeded {
        return Err(AppError::NotFound(result.message));
    }
    Ok(HttpResponse::Ok().json(result))
}

/// 역할 변경 핸들러
///
/// 역할 이름은 열거 제약 없이 그대로 전달됩니다. 성공은 "요청이 계정
/// 서비스에 수락되었다"는 의미입니다.
///
/// # Endpoint
/// `PATCH /accounts/{user_id}/role`
#[patch("/{user_id}/role")]
pub async fn change_role(
    user_id: web::Path<String>,
    payload: web::Json<ChangeRoleForm>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();
    let result = auth_service.change_role(&user_id, &payload.new_role).await;

    Ok(HttpResponse::Ok().json(result))
}
