//! # 요청 파이프라인 단계
//!
//! 각 라우트는 `authenticate → [validate] → handler` 순서로 처리됩니다.
//! Axum에서는 이 단계들을 핸들러 인자(추출자, Extractor)로 표현하며,
//! 인자는 선언된 순서대로 실행되고 첫 실패에서 바로 응답을 돌려줍니다.
//!
//! - `path`: 숫자 ID 경로 파라미터 (아니면 404)
//! - `auth`: Bearer 토큰 인증 (아니면 401)
//! - `validate`: 본문/쿼리 스키마 검증 (아니면 400)

pub mod auth;
pub mod path;
pub mod validate;

pub use auth::AuthUser;
pub use path::NumericId;
pub use validate::{ValidatedJson, ValidatedQuery};
