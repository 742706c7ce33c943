//! # 사용자 데이터베이스 쿼리 모듈
//!
//! 광고 소유자(users) 조회/생성 쿼리입니다.
//! 회원가입·로그인은 이 서비스의 범위가 아니므로, 광고 생성 전 소유자 존재 확인과
//! 초기 데이터(시드) 입력에 필요한 최소한의 쿼리만 둡니다.

use crate::models::user::{CreateUserRequest, User};
use sqlx::SqlitePool;

pub async fn create_user(pool: &SqlitePool, req: &CreateUserRequest) -> sqlx::Result<User> {
    let result = sqlx::query("INSERT INTO users (first_name, last_name, email) VALUES (?, ?, ?)")
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .execute(pool)
        .await?;

    // INTEGER PRIMARY KEY AUTOINCREMENT: SQLite가 부여한 행 ID를 그대로 사용자 ID로 씁니다
    let id = result.last_insert_rowid();
    find_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, email, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// 토큰으로 인증된 사용자의 행이 없으면 빈 이름으로 만들어 둡니다.
///
/// 사용자 계정은 이 서비스 밖에서 발급되므로, 본인 명의의 첫 광고를 만들 때 소유자 행이 생깁니다.
/// 이미 있으면 아무것도 바꾸지 않습니다.
pub async fn ensure_exists(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO users (id, first_name, last_name) VALUES (?, '', '') ON CONFLICT(id) DO NOTHING",
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn exists(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}
