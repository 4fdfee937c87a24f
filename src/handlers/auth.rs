//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 인증 코드 관련 HTTP 엔드포인트를 처리하는 핸들러
//! 함수들입니다. 모든 응답 본문은 오케스트레이터가 돌려준 `Outcome`을
//! 그대로 직렬화합니다.
//!
//! # Endpoints
//!
//! - **회원가입**: 직접 가입 (`POST /auth/signup`), 코드 검증 가입
//!   (`POST /auth/signup/verified`)
//! - **로그인**: 이메일/비밀번호 (`POST /auth/signin`)
//! - **인증 코드**: 발송 요청 (`POST /auth/verification-code/request`),
//!   검증 (`POST /auth/verification-code/verify`)

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::{RequestCodeForm, SignInForm, SignUpForm, VerifiedSignUpForm, VerifyForm};
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 직접 회원가입 핸들러
///
/// 폼 검증을 통과한 이메일/비밀번호를 계정 원장 서비스로 전달합니다.
/// 실패한 Outcome은 500으로 매핑됩니다.
///
/// # Endpoint
/// `POST /auth/signup`
#[post("/signup")]
pub async fn sign_up(payload: web::Json<SignUpForm>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();
    let result = auth_service.sign_up(&payload.email, &payload.password).await;

    if !result.succeeded {
        return Err(AppError::InternalError(result.message));
    }
    Ok(HttpResponse::Ok().json(result))
}

/// 코드 검증을 거치는 회원가입 핸들러
///
/// 코드 검증이 실패하면 계정 생성은 시도되지 않고 검증 실패가
/// 그대로 반환됩니다.
///
/// # Endpoint
/// `POST /auth/signup/verified`
#[post("/signup/verified")]
pub async fn sign_up_verified(
    payload: web::Json<VerifiedSignUpForm>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();
    let result = auth_service
        .sign_up_verified(&payload.email, &payload.password, &payload.code)
        .await;

    if !result.succeeded {
        return Err(AppError::InternalError(result.message));
    }
    Ok(HttpResponse::Ok().json(result))
}

/// 로그인 핸들러
///
/// 실패한 Outcome은 401로 매핑됩니다. 폼 검증 실패도 필드 정보를
/// 노출하지 않는 고정 메시지의 401입니다.
///
/// # Endpoint
/// `POST /auth/signin`
#[post("/signin")]
pub async fn sign_in(payload: web::Json<SignInForm>) -> Result<HttpResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::AuthenticationError(
            "Invalid credentials.".to_string(),
        ));
    }

    let auth_service = AuthService::instance();
    let result = auth_service.sign_in(&payload.email, &payload.password).await;

    if !result.succeeded {
        return Err(AppError::AuthenticationError(result.message));
    }
    Ok(HttpResponse::Ok().json(result))
}

/// 인증 코드 발송 요청 핸들러
///
/// 성공/실패 여부는 Outcome 본문이 전달합니다. HTTP 상태는 항상 200입니다.
///
/// # Endpoint
/// `POST /auth/verification-code/request`
#[post("/verification-code/request")]
pub async fn request_verification_code(
    payload: web::Json<RequestCodeForm>,
) -> Result<HttpResponse, AppError> {
    let auth_service = AuthService::instance();
    let result = auth_service.request_verification_code(&payload.email).await;

    Ok(HttpResponse::Ok().json(result))
}

/// 인증 코드 검증 핸들러
///
/// # Endpoint
/// `POST /auth/verification-code/verify`
#[post("/verification-code/verify")]
pub async fn verify_code(payload: web::Json<VerifyForm>) -> Result<HttpResponse, AppError> {
    let auth_service = AuthService::instance();
    let result = auth_service.verify_code(&payload.email, &payload.code).await;

    Ok(HttpResponse::Ok().json(result))
}
