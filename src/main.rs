//! # adboard 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성 및 마이그레이션 실행
//! 4. 광고 서비스와 라우터 조립
//! 5. HTTP 서버 시작

use std::sync::Arc;

use adboard::{build_app, config::Config, db, services::SqliteAdService, AppState};
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다
    dotenvy::dotenv().ok();

    // RUST_LOG가 없으면 adboard, tower_http, axum 모듈을 debug 레벨로 출력
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adboard=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting adboard server on {}", config.bind_addr());

    // 최대 5개의 동시 연결을 유지하는 풀. 마이그레이션까지 끝난 상태로 돌려받습니다.
    let pool = db::connect(&config.database_url, 5).await?;

    // SqliteAdService를 Arc<dyn AdService>로 감싸 AppState에 넣습니다.
    let state = AppState::new(Arc::new(SqliteAdService::new(pool)), config.jwt_secret.clone());
    let app = build_app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
