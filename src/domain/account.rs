//! 계정 뷰 모델
//!
//! 계정의 원본과 수명 주기는 계정 원장 서비스가 소유합니다.
//! 게이트웨이는 요청 처리 동안만 유지되는 일시적인 복사본을 다루며
//! 어떤 경우에도 요청 간에 캐싱하지 않습니다.

use serde::Serialize;

/// 계정 원장 서비스가 반환한 계정의 게이트웨이 측 표현
///
/// `user_id`는 계정 서비스가 발급한 불투명한 고정 식별자이며,
/// 이후의 모든 조회와 역할 변경에 사용되는 유일한 키입니다.
/// `role_name`은 게이트웨이 차원의 열거 제약이 없습니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Account {
    pub user_id: String,
    pub email: String,
    pub phone_number: String,
    pub role_name: String,
}
