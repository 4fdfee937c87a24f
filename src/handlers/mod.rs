//! # HTTP Request Handlers Module
//!
//! 게이트웨이로 들어오는 HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 이 계층은 의도적으로 얇게 유지합니다: 폼 파싱과 `validator` 검증,
//! 오케스트레이터 호출, `Outcome.succeeded`의 HTTP 상태 매핑까지만
//! 담당하고 결정 로직은 전부 서비스 계층에 둡니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Web, Mobile, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 폼 검증, 상태 코드 매핑
//! ├─────────────────────────────────────────────┤
//!   AuthService - 워크플로우 오케스트레이션
//! ├─────────────────────────────────────────────┤
//!   Clients - gRPC / Redis / HTTP 협력자
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 상태 코드 매핑
//!
//! | 엔드포인트 | 성공 | 실패 |
//! |---|---|---|
//! | `POST /signup`, `/signup/verified` | 200 | 500 |
//! | `POST /signin` | 200 | 401 |
//! | `POST /verification-code/*` | 200 | 200 (Outcome에 실패 표시) |
//! | `GET /accounts`, `PATCH .../role` | 200 | 200 (Outcome에 실패 표시) |
//! | `GET /accounts/{id}` | 200 | 404 |

pub mod accounts;
pub mod auth;
