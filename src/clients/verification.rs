//! # 인증 코드 검증 API 클라이언트
//!
//! 외부 검증 제공자의 HTTP 엔드포인트로 (이메일, 코드) 쌍을 보내
//! 이전에 발급된 코드와 일치하는지 확인합니다. 요청-코드와 검증-코드 사이에
//! 게이트웨이가 유지하는 식별자는 없으며, 매칭은 전적으로 외부 제공자에게
//! 위임됩니다.
//!
//! ## 실패 분류
//!
//! 검증 호출의 결과는 세 갈래로 분류되며, 이 분류가 호출자에게 그대로
//! 전달됩니다:
//!
//! | 분류 | 조건 | 메시지 |
//! |------|------|--------|
//! | `Rejected` | 서버가 응답했으나 non-2xx | 에러 본문에서 추출 |
//! | `Network` | 요청이 서버에 도달하지 못함 (타임아웃 포함) | 전송 에러 설명 |
//! | `Other` | 그 외 예기치 못한 실패 (본문 읽기 실패 등) | 원문 그대로 |
//!
//! 에러 본문은 JSON 객체(`{"message": "..."}`)일 수도, 평문일 수도 있습니다.
//! 고정 스키마를 가정하지 않고 구조적 파싱을 시도한 뒤 실패하면 본문
//! 원문으로 폴백합니다.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::AppError;

/// 검증 시도가 성공하지 못한 경우의 분류
///
/// `Rejected`만 "검증자가 코드를 거부했다"는 의미이고, 나머지 둘은
/// 검증 자체가 수행되지 못한 경우입니다. 호출 측은 `Network`에
/// `"Network error: "` 접두사를 붙여 전송 문제를 구분 가능하게 만듭니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodeValidationError {
    /// 검증자가 거부함. 에러 본문에서 추출한 메시지를 담습니다.
    #[error("{0}")]
    Rejected(String),

    /// 요청이 서버에 도달하지 못했거나 전송 계층이 실패함.
    #[error("{0}")]
    Network(String),

    /// 그 외 예기치 못한 실패.
    #[error("{0}")]
    Other(String),
}

/// 인증 코드 검증 포트
#[async_trait]
pub trait CodeValidator: Send + Sync {
    /// (이메일, 코드) 쌍을 외부 검증자에 확인합니다. `Ok(())`가 검증 성공입니다.
    async fn validate(&self, email: &str, code: &str) -> Result<(), CodeValidationError>;
}

/// reqwest 기반 검증 클라이언트 구현체
///
/// HTTP 클라이언트는 한 번 생성되어 재사용되며 연결/요청 타임아웃이
/// 걸려 있습니다. 타임아웃은 전송 실패(`Network`)로 분류됩니다.
pub struct HttpCodeValidator {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpCodeValidator {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ConfigurationError(format!("검증 API 클라이언트 생성 실패: {}", e))
            })?;

        Ok(Self {
            http,
            url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl CodeValidator for HttpCodeValidator {
    async fn validate(&self, email: &str, code: &str) -> Result<(), CodeValidationError> {
        let payload = serde_json::json!({
            "email": email,
            "code": code,
        });

        let response = self
            .http
            .post(&self.url)
            .query(&[("code", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| CodeValidationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| CodeValidationError::Other(e.to_string()))?;
            return Err(CodeValidationError::Rejected(
                RejectionBody::parse(&body).into_message(),
            ));
        }

        Ok(())
    }
}

/// 검증자의 에러 본문 해석 결과
///
/// 파싱 예외를 제어 흐름으로 쓰는 대신 태그가 있는 결과로 표현합니다.
#[derive(Debug, PartialEq)]
enum RejectionBody {
    /// 평탄한 문자열 맵 JSON에서 `message` 키를 추출함.
    /// 맵이지만 키가 없으면 빈 메시지입니다 (원 계약 유지).
    ParsedMessage(String),
    /// 본문이 해당 형태의 JSON이 아니어서 원문을 그대로 사용함.
    RawText(String),
}

impl RejectionBody {
    fn parse(body: &str) -> Self {
        match serde_json::from_str::<HashMap<String, String>>(body) {
            Ok(map) => Self::ParsedMessage(map.get("message").cloned().unwrap_or_default()),
            Err(_) => Self::RawText(body.to_string()),
        }
    }

    fn into_message(self) -> String {
        match self {
            Self::ParsedMessage(message) | Self::RawText(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_with_message_key() {
        let parsed = RejectionBody::parse(r#"{"message":"Invalid code"}"#);
        assert_eq!(parsed, RejectionBody::ParsedMessage("Invalid code".into()));
        assert_eq!(parsed.into_message(), "Invalid code");
    }

    #[test]
    fn test_plain_text_body_falls_back_to_raw() {
        let parsed = RejectionBody::parse("Raw error text");
        assert_eq!(parsed.into_message(), "Raw error text");
    }

    #[test]
    fn test_json_map_without_message_key_yields_empty() {
        let parsed = RejectionBody::parse(r#"{"detail":"nope"}"#);
        assert_eq!(parsed, RejectionBody::ParsedMessage(String::new()));
    }

    #[test]
    fn test_non_map_json_falls_back_to_raw() {
        // 유효한 JSON이어도 문자열 맵이 아니면 원문 폴백
        let parsed = RejectionBody::parse(r#"["Invalid code"]"#);
        assert_eq!(parsed, RejectionBody::RawText(r#"["Invalid code"]"#.into()));

        let parsed = RejectionBody::parse(r#"{"message":5}"#);
        assert_eq!(parsed, RejectionBody::RawText(r#"{"message":5}"#.into()));
    }

    #[actix_web::test]
    async fn test_unreachable_validator_is_classified_as_network() {
        let validator = HttpCodeValidator::new(
            "http://127.0.0.1:9/api/ValidateVerificationCode",
            "dummy-key",
            Duration::from_millis(500),
        )
        .unwrap();

        let result = validator.validate("bjorn@domain.com", "123456").await;

        match result {
            Err(CodeValidationError::Network(_)) => {}
            other => panic!("expected Network classification, got {:?}", other),
        }
    }
}
