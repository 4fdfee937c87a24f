//! # 인증 오케스트레이터
//!
//! 게이트웨이의 핵심입니다. 세 외부 협력자(계정 원장 gRPC 서비스, 인증 코드
//! 브로커, 코드 검증 HTTP API)에 대한 호출을 순서대로 엮어 하나의 일관된
//! `Outcome`으로 합칩니다. 실제 결정 로직과 실패 합성 규칙은 전부 이
//! 모듈에 있습니다.
//!
//! ## 워크플로우 제어 흐름
//!
//! ```text
//! request_verification_code ──► 브로커 게시
//!
//! verify_code ──────────────► 검증 API 호출
//!
//! sign_up ──────────────────► CreateAccount
//!
//! sign_up_verified ─► verify_code ─┬─ 실패 ─► 단락 반환 (계정 서비스 호출 없음)
//!                                  └─ 성공 ─► sign_up
//!
//! sign_in ─► ValidateCredentials ─┬─ 실패 ─► 그대로 반환
//!                                 └─ 성공 ─► GetAccount ─┬─ 실패 ─► 전체 실패
//!                                                        └─ 성공 ─► 성공
//! ```
//!
//! ## 실패 합성 규칙
//!
//! 1. **로컬 검증 실패**: 아웃바운드 호출 없이 고정 메시지로 즉시 실패.
//! 2. **협력자 보고 실패**: 협력자가 응답했으나 거절. 메시지를 그대로 전달.
//! 3. **전송 실패**: HTTP 검증자에 한해 `"Network error: "` 접두사로 구분.
//! 4. **그 외 실패**: 원 에러 텍스트를 접두사 없이 전달.
//!
//! 모든 워크플로우는 자신의 경계에서 실패를 `Outcome`으로 변환합니다.
//! 어떤 에러도 호출 계층으로 전파되지 않으며, 프로세스에 치명적인 실패는
//! 없습니다. 단계 사이에는 병렬 분기가 없고, 각 단계의 결과가 다음 단계의
//! 실행 여부를 결정합니다. 재시도는 수행하지 않습니다.

use std::sync::Arc;

use crate::clients::{AccountClient, CodeValidationError, CodeValidator, VerificationPublisher};
use crate::core::registry::ServiceLocator;
use crate::domain::{AccountData, AccountListData, Outcome, SignInData, SignUpData};

/// 인증 워크플로우 오케스트레이터
///
/// 요청마다 상태를 갖지 않습니다. 주입된 클라이언트들은 프로세스 수명을
/// 가지며 요청 간에 공유됩니다 (연결 재사용). 게이트웨이 자체는 어떤
/// 내구 상태도 보유하지 않습니다.
pub struct AuthService {
    account: Arc<dyn AccountClient>,
    publisher: Arc<dyn VerificationPublisher>,
    validator: Arc<dyn CodeValidator>,
}

impl AuthService {
    pub fn new(
        account: Arc<dyn AccountClient>,
        publisher: Arc<dyn VerificationPublisher>,
        validator: Arc<dyn CodeValidator>,
    ) -> Self {
        Self {
            account,
            publisher,
            validator,
        }
    }

    /// 레지스트리에 등록된 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 인증 코드 발송을 요청합니다.
    ///
    /// 빈 이메일은 아웃바운드 호출 없이 로컬에서 거부합니다.
    /// 성공 기준은 "브로커가 메시지를 수락했다"까지이며, 코드 생성과 발송은
    /// 외부 서비스의 몫이라 여기서 관측하지 않습니다.
    pub async fn request_verification_code(&self, email: &str) -> Outcome<SignUpData> {
        if email.trim().is_empty() {
            return Outcome::fail("Email is required.");
        }

        match self.publisher.publish(email).await {
            Ok(()) => {
                log::info!("인증 코드 발송 요청 게시됨: {}", email);
                Outcome::ok("Verification code sent to email.")
            }
            Err(e) => {
                log::warn!("인증 코드 발송 요청 실패: {}", e);
                Outcome::fail(e.to_string())
            }
        }
    }

    /// (이메일, 코드) 쌍을 외부 검증자에 확인합니다.
    ///
    /// 세 갈래 실패 분류를 그대로 노출합니다:
    /// 검증자 거부는 본문에서 추출한 메시지, 전송 실패는 `"Network error: "`
    /// 접두사, 그 외는 원문 그대로.
    pub async fn verify_code(&self, email: &str, code: &str) -> Outcome<SignUpData> {
        if email.trim().is_empty() || code.trim().is_empty() {
            return Outcome::fail("Email and verification code are required.");
        }

        match self.validator.validate(email, code).await {
            Ok(()) => Outcome::ok("The account is verified"),
            Err(CodeValidationError::Rejected(message)) => Outcome::fail(message),
            Err(CodeValidationError::Network(description)) => {
                log::warn!("검증 API 전송 실패: {}", description);
                Outcome::fail(format!("Network error: {}", description))
            }
            Err(CodeValidationError::Other(text)) => Outcome::fail(text),
        }
    }

    /// 직접 회원가입. 이메일/비밀번호를 계정 서비스로 전달합니다.
    pub async fn sign_up(&self, email: &str, password: &str) -> Outcome<SignUpData> {
        match self.account.create_account(email, password).await {
            Ok(reply) if reply.succeeded => {
                log::info!("계정 생성됨: {} -> {}", email, reply.user_id);
                Outcome::ok_with(
                    reply.message,
                    SignUpData {
                        user_id: reply.user_id,
                    },
                )
            }
            Ok(reply) => Outcome::fail(reply.message),
            Err(e) => Outcome::fail(e.to_string()),
        }
    }

    /// 코드 검증을 거치는 회원가입.
    ///
    /// 순서 불변식: 검증되지 않은 신원으로는 계정 생성을 시도하지 않습니다.
    /// 검증 실패 시 계정 서비스에 접촉하지 않고 그 실패를 그대로 반환합니다.
    pub async fn sign_up_verified(
        &self,
        email: &str,
        password: &str,
        code: &str,
    ) -> Outcome<SignUpData> {
        let verified = self.verify_code(email, code).await;
        if !verified.succeeded {
            return verified;
        }

        self.sign_up(email, password).await
    }

    /// 로그인. 자격 증명 검증 후 프로필을 조회해 역할을 채웁니다.
    ///
    /// 부분 실패 강등(policy): 자격 증명이 유효해도 프로필 조회가 실패하면
    /// 전체를 실패로 보고합니다. 유효한 자격 증명이 성공한 로그인으로
    /// 보이는 일은 없습니다.
    ///
    /// 토큰 필드는 확장 지점입니다. 토큰 발급 협력자가 생기기 전까지
    /// `access_token`/`refresh_token`은 항상 `None`입니다.
    pub async fn sign_in(&self, email: &str, password: &str) -> Outcome<SignInData> {
        let reply = match self.account.validate_credentials(email, password).await {
            Ok(reply) => reply,
            Err(e) => return Outcome::fail(e.to_string()),
        };

        if !reply.succeeded {
            // 협력자가 보고한 실패는 가공 없이 그대로 반환합니다.
            return Outcome::fail(reply.message);
        }

        let account = match self.account.get_account(&reply.user_id).await {
            Ok(profile) if profile.succeeded => profile.account,
            _ => None,
        };

        let Some(account) = account else {
            log::warn!("자격 증명은 유효하나 프로필 조회 실패: {}", reply.user_id);
            return Outcome::fail("Failed to retrieve account info.");
        };

        log::info!("로그인 성공: {} ({})", reply.user_id, account.role_name);

        Outcome::ok_with(
            reply.message,
            SignInData {
                user_id: reply.user_id,
                role_name: account.role_name,
                access_token: None,
                refresh_token: None,
            },
        )
    }

    /// 전체 계정 목록을 조회합니다.
    ///
    /// 빈 응답은 빈 컬렉션입니다. null이 되는 경우는 없습니다.
    pub async fn list_accounts(&self) -> Outcome<AccountListData> {
        match self.account.get_accounts().await {
            Ok(accounts) => Outcome::ok_with("Accounts retrieved.", AccountListData { accounts }),
            Err(e) => Outcome::fail(e.to_string()),
        }
    }

    /// UserId로 계정 단건을 조회합니다.
    ///
    /// 실패/부정 응답은 서비스의 메시지를 담은 실패 Outcome으로 매핑됩니다.
    /// 백엔드 상태가 같다면 같은 입력에 같은 Outcome을 돌려줍니다.
    pub async fn get_account(&self, user_id: &str) -> Outcome<AccountData> {
        match self.account.get_account(user_id).await {
            Ok(reply) => match reply.account {
                Some(account) if reply.succeeded => {
                    Outcome::ok_with(reply.message, AccountData { account })
                }
                _ => Outcome::fail(reply.message),
            },
            Err(e) => Outcome::fail(e.to_string()),
        }
    }

    /// 역할 변경을 요청합니다.
    ///
    /// 계정 서비스의 응답에는 성공 플래그가 없습니다. 따라서 여기서의 성공은
    /// "요청이 계정 서비스에 수락되었다"는 뜻이지 "역할 변경이 확인되었다"는
    /// 뜻이 아닙니다. 에러가 아닌 모든 응답은 성공으로 보고하고 서비스의
    /// 메시지만 그대로 노출합니다.
    pub async fn change_role(&self, user_id: &str, new_role: &str) -> Outcome<AccountData> {
        match self.account.change_user_role(user_id, new_role).await {
            Ok(message) => {
                log::info!("역할 변경 요청 수락됨: {} -> {}", user_id, new_role);
                Outcome::ok(message)
            }
            Err(e) => Outcome::fail(e.to_string()),
        }
    }
}
