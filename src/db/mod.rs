//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 서비스 계층(services/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `ads`: 광고 CRUD 쿼리
//! - `users`: 광고 소유자 조회/생성 쿼리

pub mod ads;
pub mod users;

pub use ads::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// SQLite 연결 풀을 만들고 아직 적용되지 않은 마이그레이션을 실행합니다.
///
/// - `create_if_missing(true)`: DB 파일이 없으면 새로 만듭니다
/// - `sqlx::migrate!`: 컴파일 타임에 ./migrations 폴더의 SQL 파일들을 포함시키는 매크로
///
/// 인메모리 DB(`sqlite::memory:`)는 연결마다 별도의 DB가 생기므로
/// 테스트에서는 `max_connections`를 1로 넘겨야 합니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
