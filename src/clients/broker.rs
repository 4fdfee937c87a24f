//! # 인증 코드 발송 브로커 퍼블리셔
//!
//! 인증 코드 발송은 게이트웨이가 직접 하지 않습니다. 브로커 채널에 이메일
//! 주소를 게시하면, 채널을 구독하는 다운스트림 이메일러가 코드를 생성해
//! 발송합니다 (at-least-once 전달은 브로커의 책임).
//!
//! 게이트웨이 관점의 성공 기준은 "브로커가 메시지를 수락했다"까지입니다.
//! 전달, 코드 생성, 발송 여부는 여기서 관측하지 않습니다.
//!
//! ## 연결 관리
//!
//! 연결은 프로세스 기동 시 한 번 수립되어 재사용됩니다. 게시 호출마다
//! 멀티플렉싱된 연결 핸들을 복제해 사용하며, 프로세스 종료 시 함께
//! 해제됩니다. 호출당 연결을 만들고 버리는 방식은 쓰지 않습니다.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::errors::{AppError, ClientError};

/// 인증 코드 발송 트리거 포트
///
/// 게시 한 번당 시도도 정확히 한 번입니다. 실패 시 재시도하지 않고
/// 원 에러 텍스트를 그대로 돌려줍니다.
#[async_trait]
pub trait VerificationPublisher: Send + Sync {
    async fn publish(&self, email: &str) -> Result<(), ClientError>;
}

/// Redis PUBLISH 기반 퍼블리셔 구현체
pub struct RedisVerificationPublisher {
    /// 멀티플렉싱된 연결 핸들. 복제는 같은 연결을 공유합니다.
    manager: ConnectionManager,
    channel: String,
    timeout: Duration,
}

impl RedisVerificationPublisher {
    /// 브로커에 연결하고 퍼블리셔를 생성합니다.
    ///
    /// 기동 시 PING으로 브로커 가용성을 확인합니다. 연결 실패는 기동
    /// 실패로 처리합니다.
    pub async fn connect(url: &str, channel: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = redis::Client::open(url)
            .map_err(|e| AppError::ConfigurationError(format!("잘못된 브로커 URL: {}", e)))?;

        let mut manager = client.get_connection_manager().await.map_err(|e| {
            AppError::ExternalServiceError(format!("브로커 연결 실패: {}", e))
        })?;

        redis::cmd("PING")
            .query_async::<()>(&mut manager)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("브로커 응답 없음: {}", e)))?;

        Ok(Self {
            manager,
            channel: channel.to_string(),
            timeout,
        })
    }
}

#[async_trait]
impl VerificationPublisher for RedisVerificationPublisher {
    async fn publish(&self, email: &str) -> Result<(), ClientError> {
        let mut conn = self.manager.clone();

        // 구독자 수는 관심사가 아니므로 버립니다.
        let publish = conn.publish::<_, _, i64>(&self.channel, email);

        match tokio::time::timeout(self.timeout, publish).await {
            Ok(Ok(_receivers)) => Ok(()),
            Ok(Err(e)) => Err(ClientError::new(e.to_string())),
            Err(_) => Err(ClientError::new(format!(
                "broker publish timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}
