//! # 애플리케이션 공유 상태
//!
//! 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
//! Axum의 의존성 주입(Dependency Injection) 메커니즘입니다.

use std::sync::Arc;

use crate::services::AdService;

// #[derive(Clone)]: Axum의 State 추출자는 요청마다 AppState를 clone합니다.
// Arc<dyn AdService>는 참조 카운트만 늘어나므로 서비스 자체는 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    /// 광고 컨트롤러 (운영: `SqliteAdService`, 테스트: 가짜 구현)
    pub ads: Arc<dyn AdService>,
    /// JWT 토큰 검증용 비밀키
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(ads: Arc<dyn AdService>, jwt_secret: impl Into<String>) -> Self {
        Self {
            ads,
            jwt_secret: jwt_secret.into(),
        }
    }
}
