//! 외부 협력자 클라이언트
//!
//! 게이트웨이가 의존하는 세 백엔드(계정 원장 gRPC 서비스, 메시지 브로커,
//! 인증 코드 검증 HTTP API)에 대한 접근 계층입니다.
//!
//! 각 협력자는 trait(포트)으로 추상화되어 있고, 프로세스 수명의 구현체가
//! `main`에서 한 번 생성되어 오케스트레이터에 주입됩니다.
//! 테스트에서는 동일 trait의 인메모리 목 구현을 주입합니다.

pub mod account;
pub mod broker;
pub mod verification;

/// gRPC 계약에서 생성된 코드
pub mod proto {
    pub mod account {
        pub mod v1 {
            tonic::include_proto!("account.v1");
        }
    }
}

pub use account::{AccountClient, GrpcAccountClient};
pub use broker::{RedisVerificationPublisher, VerificationPublisher};
pub use verification::{CodeValidationError, CodeValidator, HttpCodeValidator};
