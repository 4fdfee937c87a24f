//! # Gateway Configuration Module
//!
//! 게이트웨이가 의존하는 세 외부 협력자(계정 gRPC 서비스, 메시지 브로커,
//! 인증 코드 검증 API)의 접속 정보를 환경 변수로 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export ACCOUNT_SERVICE_URL="http://localhost:50051"
//! export REDIS_URL="redis://localhost:6379"
//! export VERIFICATION_CHANNEL="account-verification"
//! export VERIFICATION_API_URL="https://verificationserviceprovider.azurewebsites.net/api/ValidateVerificationCode"
//! export VERIFICATION_API_KEY="your-function-key"
//! export OUTBOUND_TIMEOUT_SECS="10"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AccountServiceConfig, VerificationApiConfig};
//!
//! let endpoint = AccountServiceConfig::endpoint();
//! let api_key = VerificationApiConfig::api_key();
//! ```

use std::env;
use std::time::Duration;

/// 계정 원장 gRPC 서비스 접속 설정
pub struct AccountServiceConfig;

impl AccountServiceConfig {
    /// 계정 서비스 gRPC 엔드포인트를 반환합니다.
    ///
    /// # 환경 변수
    ///
    /// ```bash
    /// export ACCOUNT_SERVICE_URL="http://localhost:50051"
    /// ```
    pub fn endpoint() -> String {
        env::var("ACCOUNT_SERVICE_URL").unwrap_or_else(|_| "http://localhost:50051".to_string())
    }
}

/// 메시지 브로커(인증 코드 발송 트리거) 설정
pub struct BrokerConfig;

impl BrokerConfig {
    /// 브로커 접속 URL을 반환합니다.
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 인증 코드 발송 요청을 게시할 채널 이름을 반환합니다.
    ///
    /// 다운스트림 이메일러가 이 채널을 구독합니다. 게이트웨이는 게시만 합니다.
    pub fn verification_channel() -> String {
        env::var("VERIFICATION_CHANNEL").unwrap_or_else(|_| "account-verification".to_string())
    }
}

/// 외부 인증 코드 검증 API 설정
///
/// 버전이 있는 외부 HTTP API이므로 URL 전체를 설정으로 받습니다.
pub struct VerificationApiConfig;

impl VerificationApiConfig {
    /// 검증 API 엔드포인트 URL을 반환합니다.
    pub fn url() -> String {
        env::var("VERIFICATION_API_URL").unwrap_or_else(|_| {
            "https://verificationserviceprovider.azurewebsites.net/api/ValidateVerificationCode"
                .to_string()
        })
    }

    /// 검증 API 키를 반환합니다. 쿼리 파라미터 `code`로 전달됩니다.
    ///
    /// # Panics
    ///
    /// `VERIFICATION_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn api_key() -> String {
        env::var("VERIFICATION_API_KEY").expect("VERIFICATION_API_KEY must be set")
    }
}

/// 아웃바운드 호출 공통 설정
pub struct OutboundConfig;

impl OutboundConfig {
    /// 모든 아웃바운드 호출(gRPC, HTTP, 브로커 게시)에 적용되는 타임아웃.
    ///
    /// 타임아웃은 전송 계층 실패와 동일하게 분류됩니다.
    /// 재시도는 어디에서도 수행하지 않습니다. 재시도 정책은 호출자 소유입니다.
    pub fn timeout() -> Duration {
        parse_timeout_secs(env::var("OUTBOUND_TIMEOUT_SECS").ok())
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 바인드 주소를 반환합니다.
    pub fn bind_address() -> String {
        env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
    }
}

/// 타임아웃 초 값을 파싱합니다. 누락되거나 잘못된 값이면 기본 10초를 사용합니다.
fn parse_timeout_secs(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(10);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        assert_eq!(parse_timeout_secs(None), Duration::from_secs(10));
    }

    #[test]
    fn test_timeout_parses_valid_value() {
        assert_eq!(
            parse_timeout_secs(Some("3".to_string())),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_timeout_rejects_invalid_values() {
        assert_eq!(
            parse_timeout_secs(Some("abc".to_string())),
            Duration::from_secs(10)
        );
        assert_eq!(
            parse_timeout_secs(Some("0".to_string())),
            Duration::from_secs(10)
        );
    }
}
