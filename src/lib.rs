//! 인증 게이트웨이 백엔드
//!
//! 세 백엔드 서비스(계정 원장 gRPC 서비스, 메시지 브로커, 인증 코드 검증
//! HTTP API)를 엮어 회원가입/로그인/계정 관리 워크플로우를 제공하는
//! 오케스트레이션 게이트웨이입니다. 게이트웨이 자체는 계정 데이터를
//! 보유하지 않으며, 모든 진실은 계정 원장 서비스에 있습니다.
//!
//! # Features
//!
//! - **회원가입**: 직접 가입과 인증 코드 검증을 거치는 가입
//! - **로그인**: 자격 증명 검증 + 프로필 조회 (부분 실패는 전체 실패로 강등)
//! - **인증 코드**: 브로커를 통한 발송 요청, 외부 API를 통한 검증
//! - **계정 디렉터리**: 목록/단건 조회, 역할 변경
//! - **균일한 결과**: 모든 워크플로우가 단일 `Outcome` 형태를 반환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 검증, 상태 코드 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthService   │ ← 워크플로우 오케스트레이션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Clients     │ ← trait 포트 + gRPC/Redis/HTTP 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────┐
//! │ Account Service / Broker / Validator │ ← 외부 협력자
//! └─────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_gateway_backend::services::auth::AuthService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let auth_service = AuthService::instance();
//!
//! // 워크플로우 실행. 에러는 항상 Outcome 안에 담겨 돌아옵니다.
//! let outcome = auth_service.sign_in("user@example.com", "Passw0rd!").await;
//! ```

pub mod clients;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
