//! 오케스트레이터 공통 결과 타입
//!
//! 게이트웨이의 모든 워크플로우는 성공 여부와 사람이 읽을 수 있는 메시지,
//! 그리고 선택적 페이로드를 담은 단일 `Outcome` 값을 반환합니다.
//! 어떤 워크플로우도 자신의 경계 밖으로 에러를 던지지 않습니다.

use serde::Serialize;

use crate::domain::account::Account;

/// 모든 오케스트레이터 연산이 반환하는 균일한 결과 형태
///
/// `succeeded`가 `false`면 `data`는 항상 `None`입니다.
/// JSON 직렬화 시 페이로드 필드는 최상위에 평탄화됩니다.
///
/// ```rust,ignore
/// let ok: Outcome<SignUpData> = Outcome::ok_with(
///     "Account created.",
///     SignUpData { user_id: "user123".into() },
/// );
/// let fail: Outcome<SignUpData> = Outcome::fail("Email is required.");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Outcome<T> {
    pub succeeded: bool,
    pub message: String,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// 페이로드 없는 성공 결과를 생성합니다.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            data: None,
        }
    }

    /// 페이로드를 포함한 성공 결과를 생성합니다.
    pub fn ok_with(message: impl Into<String>, data: T) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 실패 결과를 생성합니다. 페이로드는 담기지 않습니다.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            data: None,
        }
    }

}

/// 회원가입 성공 시 페이로드
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignUpData {
    pub user_id: String,
}

/// 로그인 성공 시 페이로드
///
/// 토큰 필드는 의도된 확장 지점입니다. 토큰 발급 협력자가 아직 없으므로
/// 게이트웨이는 항상 `None`을 반환합니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignInData {
    pub user_id: String,
    pub role_name: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// 단건 계정 조회 페이로드
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountData {
    pub account: Account,
}

/// 계정 목록 조회 페이로드. `accounts`는 비어 있을 수 있지만 null이 되지 않습니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountListData {
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_carries_no_payload() {
        let outcome: Outcome<SignUpData> = Outcome::fail("Email is required.");

        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "Email is required.");
        assert!(outcome.data.is_none());
    }

    #[test]
    fn test_payload_is_flattened_in_json() {
        let outcome = Outcome::ok_with(
            "Account created.",
            SignUpData {
                user_id: "user123".to_string(),
            },
        );

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["user_id"], "user123");
    }
}
