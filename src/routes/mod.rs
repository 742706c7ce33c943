//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `ads`: 광고 라우트 테이블과 CRUD 핸들러
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod ads;
pub mod health;

pub use ads::ad_routes;
pub use health::health_check;
