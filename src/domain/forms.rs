//! 요청 폼 DTO
//!
//! 게이트웨이로 들어오는 요청 본문을 매핑하고 `validator`로 1차 검증합니다.
//! 이메일 형식과 비밀번호 복잡도 규칙은 계정 원장 서비스와 합의된 계약입니다.
//!
//! 워크플로우 자체의 로컬 검증(빈 이메일/코드 거부)은 오케스트레이터 안에서
//! 한 번 더 수행됩니다. 폼 검증은 HTTP 표면의 관심사일 뿐입니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 폼 (직접 가입)
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = validate_password_complexity))]
    pub password: String,

    /// 사전 검증(pre-verified) 여부. 직접 가입 경로에서 호출자가 명시합니다.
    #[serde(default)]
    pub verified: bool,
}

/// 코드 검증을 거치는 회원가입 폼 (gated 가입)
#[derive(Debug, Deserialize, Validate)]
pub struct VerifiedSignUpForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = validate_password_complexity))]
    pub password: String,

    #[validate(length(min = 1, message = "Verification code is required"))]
    pub code: String,
}

/// 로그인 폼
#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 인증 코드 발송 요청 폼
#[derive(Debug, Deserialize)]
pub struct RequestCodeForm {
    pub email: String,
}

/// 인증 코드 검증 폼
#[derive(Debug, Deserialize)]
pub struct VerifyForm {
    pub email: String,
    pub code: String,
}

/// 역할 변경 폼
///
/// 역할 이름에는 열거 제약이 없습니다. 비어 있지만 않으면 그대로 전달합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangeRoleForm {
    #[validate(length(min = 1, message = "Role name is required"))]
    pub new_role: String,
}

/// 비밀번호 복잡도 검증
///
/// 원 계약: 소문자/대문자/숫자/특수문자 각 1개 이상, 8자 이상.
/// regex 크레이트는 전방탐색을 지원하지 않으므로 문자 클래스 검사로 구현합니다.
fn validate_password_complexity(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_lower && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ValidationError::new("password_complexity")
            .with_message(std::borrow::Cow::Borrowed("Invalid password format")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str, password: &str) -> SignUpForm {
        SignUpForm {
            email: email.to_string(),
            password: password.to_string(),
            verified: false,
        }
    }

    #[test]
    fn test_valid_signup_form() {
        assert!(signup("bjorn@domain.com", "Passw0rd!").validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_email() {
        assert!(signup("not-an-email", "Passw0rd!").validate().is_err());
    }

    #[test]
    fn test_rejects_weak_passwords() {
        // 너무 짧음 / 대문자 없음 / 숫자 없음 / 특수문자 없음
        for password in ["P0rd!", "passw0rd!", "Password!", "Passw0rd1"] {
            assert!(
                signup("bjorn@domain.com", password).validate().is_err(),
                "password {:?} should be rejected",
                password
            );
        }
    }

    #[test]
    fn test_change_role_requires_role_name() {
        let form = ChangeRoleForm {
            new_role: "".to_string(),
        };
        assert!(form.validate().is_err());

        let form = ChangeRoleForm {
            new_role: "Admin".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
