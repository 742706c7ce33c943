//! # adboard
//!
//! 광고(Ad) 게시판 HTTP API. 라우터 조립(`build_app`)을 라이브러리로 두어
//! `main.rs`와 통합 테스트(`tests/`)가 같은 앱을 사용합니다.
//!
//! 모듈 구성:
//! - `config`: 환경변수 설정
//! - `db`: SQLite 쿼리 (데이터 접근 계층)
//! - `error`: 에러 → HTTP 응답 중앙 매핑
//! - `middleware`: 요청 파이프라인 단계 (숫자 ID, 인증, 스키마 검증)
//! - `models`: 요청/응답/DB 구조체
//! - `routes`: 라우트 테이블과 핸들러
//! - `services`: 광고 비즈니스 로직 (권한 확인 포함)
//! - `state`: 핸들러가 공유하는 `AppState`

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

pub use error::AppError;
pub use state::AppState;

/// 모든 API 라우트가 붙는 경로 접두사
pub const API_PREFIX: &str = "/api/v1";

/// 전체 애플리케이션 라우터를 조립합니다.
///
/// - 광고 라우트와 헬스체크를 `/api/v1` 아래에 중첩(nest)
/// - 매칭되지 않는 경로는 JSON 404
/// - CORS, HTTP 요청 로깅, panic → JSON 500 변환 미들웨어
pub fn build_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(routes::ad_routes())
        .route("/health", get(routes::health_check))
        .fallback(error::not_found)
        .with_state(state);

    // 개발 환경 기준으로 모든 출처를 허용합니다
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .nest(API_PREFIX, api_routes)
        .fallback(error::not_found)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

/// 핸들러에서 panic이 나도 프로세스가 죽지 않고, 스택 트레이스 대신 일반 500 응답을 돌려줍니다.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
