//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증 워크플로우 라우트, 계정 디렉터리 라우트, 헬스체크 엔드포인트를
//! 포함합니다.
//!
//! # Available Routes
//!
//! ## 인증 (`/api/v1/auth`)
//! - `POST /signup` - 직접 회원가입
//! - `POST /signup/verified` - 코드 검증 회원가입
//! - `POST /signin` - 로그인
//! - `POST /verification-code/request` - 인증 코드 발송 요청
//! - `POST /verification-code/verify` - 인증 코드 검증
//!
//! ## 계정 디렉터리 (`/api/v1/accounts`)
//! - `GET /` - 전체 계정 목록
//! - `GET /{user_id}` - 계정 단건 조회
//! - `PATCH /{user_id}/role` - 역할 변경
//!
//! # Examples
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/auth/signin \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"user@example.com","password":"Passw0rd!"}'
//! ```

use actix_web::web;
use chrono;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_account_routes(cfg);
}

/// 인증 워크플로우 라우트를 설정합니다
///
/// 회원가입, 로그인, 인증 코드 엔드포인트를 등록합니다.
/// 인증을 위한 엔드포인트이므로 모두 Public 접근이 가능합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::sign_up)
            .service(handlers::auth::sign_up_verified)
            .service(handlers::auth::sign_in)
            .service(handlers::auth::request_verification_code)
            .service(handlers::auth::verify_code),
    );
}

/// 계정 디렉터리 라우트를 설정합니다
///
/// 계정 목록/단건 조회와 역할 변경 엔드포인트를 등록합니다.
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .service(handlers::accounts::list_accounts)
            .service(handlers::accounts::get_account)
            .service(handlers::accounts::change_role),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 게이트웨이 자체의 생존만 보고하며 협력자(계정 서비스, 브로커, 검증 API)의
/// 상태는 포함하지 않습니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "auth_gateway_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "collaborators": {
            "account_service": "gRPC",
            "broker": "Redis",
            "code_validator": "HTTP"
        }
    }))
}
