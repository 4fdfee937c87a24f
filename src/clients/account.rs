//! 계정 원장 gRPC 클라이언트
//!
//! 계정의 생성/조회, 자격 증명 검증, 역할 변경은 전부 계정 원장 서비스가
//! 소유합니다. 게이트웨이는 이 클라이언트를 통해서만 접근하며, 응답 형태를
//! 도메인 쪽 뷰 타입으로 옮겨 담아 상위 계층이 proto 타입에 의존하지 않게
//! 합니다.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

use crate::clients::proto::account::v1 as pb;
use crate::clients::proto::account::v1::account_grpc_service_client::AccountGrpcServiceClient;
use crate::domain::Account;
use crate::errors::{AppError, ClientError};

/// CreateAccount / ValidateCredentials 응답의 게이트웨이 측 표현
#[derive(Debug, Clone, PartialEq)]
pub struct AccountActionReply {
    pub succeeded: bool,
    pub message: String,
    pub user_id: String,
}

/// GetAccount 응답의 게이트웨이 측 표현
#[derive(Debug, Clone, PartialEq)]
pub struct AccountReply {
    pub succeeded: bool,
    pub message: String,
    pub account: Option<Account>,
}

/// 계정 원장 서비스 포트
///
/// 오케스트레이터는 이 trait에만 의존합니다. 전송 실패는 `ClientError`로
/// 돌아오며, 에러 텍스트는 가공 없이 실패 Outcome 메시지가 됩니다.
#[async_trait]
pub trait AccountClient: Send + Sync {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountActionReply, ClientError>;

    async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountActionReply, ClientError>;

    async fn get_account(&self, user_id: &str) -> Result<AccountReply, ClientError>;

    async fn get_accounts(&self) -> Result<Vec<Account>, ClientError>;

    /// 역할 변경을 요청하고 서비스의 메시지를 돌려줍니다.
    ///
    /// 계정 서비스의 응답에는 성공 플래그가 없습니다. 메시지만 전달됩니다.
    async fn change_user_role(&self, user_id: &str, new_role: &str)
    -> Result<String, ClientError>;
}

/// tonic 기반 계정 클라이언트 구현체
///
/// 채널은 지연 연결(lazy connect)로 프로세스당 하나를 만들어 재사용하고,
/// 요청마다 타임아웃이 적용됩니다. tonic 클라이언트 복제는 채널 참조 복사라
/// 호출 시점 복제는 비용이 들지 않습니다.
pub struct GrpcAccountClient {
    client: AccountGrpcServiceClient<Channel>,
}

impl GrpcAccountClient {
    /// 지연 연결 채널 위에 클라이언트를 생성합니다.
    ///
    /// 실제 TCP 연결은 첫 호출 시 수립됩니다. 엔드포인트 URL이 잘못된
    /// 경우에만 즉시 실패합니다.
    pub fn connect_lazy(endpoint: &str, timeout: Duration) -> Result<Self, AppError> {
        let channel = Endpoint::from_shared(endpoint.to_string())
            .map_err(|e| {
                AppError::ConfigurationError(format!("잘못된 계정 서비스 엔드포인트: {}", e))
            })?
            .timeout(timeout)
            .connect_timeout(timeout)
            .connect_lazy();

        Ok(Self {
            client: AccountGrpcServiceClient::new(channel),
        })
    }
}

fn to_account(info: pb::AccountInfo) -> Account {
    Account {
        user_id: info.user_id,
        email: info.email,
        phone_number: info.phone_number,
        role_name: info.role_name,
    }
}

#[async_trait]
impl AccountClient for GrpcAccountClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountActionReply, ClientError> {
        let request = pb::CreateAccountRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let reply = self
            .client
            .clone()
            .create_account(request)
            .await
            .map_err(|e| ClientError::new(e.to_string()))?
            .into_inner();

        Ok(AccountActionReply {
            succeeded: reply.succeeded,
            message: reply.message,
            user_id: reply.user_id,
        })
    }

    async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccountActionReply, ClientError> {
        let request = pb::ValidateCredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let reply = self
            .client
            .clone()
            .validate_credentials(request)
            .await
            .map_err(|e| ClientError::new(e.to_string()))?
            .into_inner();

        Ok(AccountActionReply {
            succeeded: reply.succeeded,
            message: reply.message,
            user_id: reply.user_id,
        })
    }

    async fn get_account(&self, user_id: &str) -> Result<AccountReply, ClientError> {
        let request = pb::GetAccountRequest {
            user_id: user_id.to_string(),
        };

        let reply = self
            .client
            .clone()
            .get_account(request)
            .await
            .map_err(|e| ClientError::new(e.to_string()))?
            .into_inner();

        Ok(AccountReply {
            succeeded: reply.succeeded,
            message: reply.message,
            account: reply.account.map(to_account),
        })
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let reply = self
            .client
            .clone()
            .get_accounts(pb::GetAccountsRequest {})
            .await
            .map_err(|e| ClientError::new(e.to_string()))?
            .into_inner();

        Ok(reply.accounts.into_iter().map(to_account).collect())
    }

    async fn change_user_role(
        &self,
        user_id: &str,
        new_role: &str,
    ) -> Result<String, ClientError> {
        let request = pb::ChangeUserRoleRequest {
            user_id: user_id.to_string(),
            new_role: new_role.to_string(),
        };

        let reply = self
            .client
            .clone()
            .change_user_role(request)
            .await
            .map_err(|e| ClientError::new(e.to_string()))?
            .into_inner();

        Ok(reply.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_info_mapping() {
        let info = pb::AccountInfo {
            user_id: "user123".to_string(),
            email: "bjorn@domain.com".to_string(),
            phone_number: "010-1234".to_string(),
            role_name: "Admin".to_string(),
        };

        let account = to_account(info);
        assert_eq!(account.user_id, "user123");
        assert_eq!(account.role_name, "Admin");
    }

    #[test]
    fn test_connect_lazy_rejects_invalid_endpoint() {
        let result = GrpcAccountClient::connect_lazy("not a url\n", Duration::from_secs(1));
        assert!(result.is_err());
    }
}
