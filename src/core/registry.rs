//! # Service Registry - 싱글톤 컨테이너
//!
//! 프로세스 수명과 함께하는 컴포넌트(계정 gRPC 클라이언트, 브로커 퍼블리셔,
//! 검증 API 클라이언트, 오케스트레이터)를 보관하는 전역 컨테이너입니다.
//!
//! 게이트웨이의 모든 컴포넌트는 런타임 설정(엔드포인트, API 키)을 필요로
//! 하므로 `main`에서 직접 생성해 `ServiceLocator::set`으로 등록합니다.
//! 핸들러는 `ServiceLocator::get::<T>()`로 동일 인스턴스를 공유합니다.
//!
//! 브로커 연결을 요청마다 만들고 버리는 대신, 연결은 한 번만 수립되어
//! 여기 등록된 클라이언트가 프로세스 종료 시까지 소유합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! // main.rs - 기동 시 1회 등록
//! let auth_service = Arc::new(AuthService::new(account, publisher, validator));
//! ServiceLocator::set(auth_service);
//!
//! // handlers - 등록된 인스턴스 공유
//! let auth_service = ServiceLocator::get::<AuthService>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// 싱글톤 컨테이너
///
/// `TypeId`를 키로 타입당 정확히 하나의 인스턴스를 보관합니다.
/// `RwLock`으로 동시 접근을 보호하며, 등록은 서버 기동 전에만 일어나므로
/// 런타임에는 사실상 읽기 전용입니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 외부에서 생성된 인스턴스를 등록합니다.
    ///
    /// 같은 타입을 다시 등록하면 기존 인스턴스를 덮어씁니다 (테스트 용도).
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::debug!("컴포넌트 등록: {}", Self::extract_clean_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 싱글톤 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 해당 타입이 등록되지 않은 경우 패닉이 발생합니다.
    /// 모든 등록은 서버 기동 전 `main`에서 끝나므로, 이 패닉은
    /// 배선(wiring) 버그를 기동 시점에 드러내는 장치입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let instances = LOCATOR.instances.read().unwrap();
        match instances.get(&TypeId::of::<T>()) {
            Some(instance) => instance
                .clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator"),
            None => panic!(
                "Component not registered: {}. Register it with ServiceLocator::set() before starting the server",
                std::any::type_name::<T>()
            ),
        }
    }

    /// 타입 이름에서 모듈 경로를 제거합니다.
    ///
    /// `std::any::type_name`은 전체 경로를 포함하므로
    /// (예: `auth_gateway_backend::services::auth::AuthService`)
    /// 로그에는 마지막 세그먼트만 사용합니다.
    fn extract_clean_type_name(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker {
        value: u32,
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(Marker { value: 7 }));

        let first = ServiceLocator::get::<Marker>();
        let second = ServiceLocator::get::<Marker>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("a::b::AuthService"),
            "AuthService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Plain"), "Plain");
    }
}
