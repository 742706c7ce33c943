//! # 서비스 계층
//!
//! 라우트 핸들러와 데이터베이스 접근 계층 사이의 비즈니스 로직입니다.
//! - `ads`: 광고 작업과 소유자/역할 기반 권한 확인

pub mod ads;

pub use ads::{AdError, AdService, SqliteAdService};
