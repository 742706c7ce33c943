//! # 광고 데이터베이스 쿼리 모듈
//!
//! 광고(ads) CRUD를 위한 SQL 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행되며 `sqlx::Result`를 반환합니다.
//! 권한 확인(소유자/역할)은 이 계층이 아니라 `services::ads`가 담당합니다.
//!
//! ## 테이블 구조
//! - `ads`: 광고 엔티티 (id, title, content, city, postal_code, user_id, created_at, updated_at)
//! - `users`: 광고 소유자 — `GET /ads`에서 JOIN하여 이름을 함께 돌려줍니다

use crate::models::*;
use sqlx::SqlitePool;

/// 광고 컬럼 목록. 여러 쿼리에서 같은 순서로 사용합니다.
const AD_COLUMNS: &str = "id, title, content, city, postal_code, user_id, created_at, updated_at";

/// ID로 광고 하나를 조회합니다.
///
/// `fetch_optional`: 결과가 0행이면 None, 1행이면 Some(Ad)
pub async fn get_ad(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Ad>> {
    sqlx::query_as::<_, Ad>(&format!("SELECT {AD_COLUMNS} FROM ads WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// 특정 사용자의 광고를 최신순으로 조회합니다.
pub async fn list_ads_by_user(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Vec<Ad>> {
    sqlx::query_as::<_, Ad>(&format!(
        "SELECT {AD_COLUMNS} FROM ads WHERE user_id = ? ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// 전체 광고를 소유자 정보와 함께 조회합니다.
///
/// 필터(city, postal_code)는 값이 없으면(NULL) 조건이 항상 참이 되도록
/// `(? IS NULL OR 컬럼 = ?)` 형태로 작성합니다. 같은 값을 두 번 바인딩합니다.
pub async fn list_ads_with_user(
    pool: &SqlitePool,
    query: &AdListQuery,
) -> sqlx::Result<Vec<AdWithUser>> {
    let rows = sqlx::query_as::<_, AdWithUserRow>(
        r#"
        SELECT a.id, a.title, a.content, a.city, a.postal_code, a.user_id,
               a.created_at, a.updated_at, u.first_name, u.last_name
        FROM ads a
        JOIN users u ON u.id = a.user_id
        WHERE (? IS NULL OR a.city = ? COLLATE NOCASE)
          AND (? IS NULL OR a.postal_code = ?)
        ORDER BY a.created_at DESC, a.id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(&query.city)
    .bind(&query.city)
    .bind(&query.postal_code)
    .bind(&query.postal_code)
    .bind(query.limit())
    .bind(query.offset())
    .fetch_all(pool)
    .await?;

    // 평평한 행(row)을 { ..., user: {...} } 구조로 변환합니다
    Ok(rows.into_iter().map(AdWithUser::from).collect())
}

/// 새 광고를 생성하고 생성된 광고를 반환합니다.
///
/// ## 처리 흐름
/// 1. INSERT 쿼리로 DB에 저장 (id, 타임스탬프는 DB가 부여)
/// 2. `last_insert_rowid()`로 새 ID를 얻음
/// 3. 방금 생성한 광고를 다시 조회하여 반환 (DB의 기본값이 적용된 완전한 데이터)
pub async fn create_ad(pool: &SqlitePool, user_id: i64, input: &AdInput) -> sqlx::Result<Ad> {
    let result = sqlx::query(
        "INSERT INTO ads (title, content, city, postal_code, user_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&input.title)
    .bind(&input.content)
    .bind(&input.city)
    .bind(&input.postal_code)
    .bind(user_id)
    .execute(pool)
    .await?;

    get_ad(pool, result.last_insert_rowid())
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// 광고 내용을 통째로 교체하고 `updated_at`을 갱신합니다.
///
/// ## 반환값
/// - `Ok(Some(Ad))`: 업데이트 성공, 변경된 광고 반환
/// - `Ok(None)`: 해당 ID의 광고가 존재하지 않음
pub async fn update_ad(pool: &SqlitePool, id: i64, input: &AdInput) -> sqlx::Result<Option<Ad>> {
    let result = sqlx::query(
        r#"
        UPDATE ads
        SET title = ?, content = ?, city = ?, postal_code = ?,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.content)
    .bind(&input.city)
    .bind(&input.postal_code)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_ad(pool, id).await
}

/// ID로 광고를 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 광고가 존재하지 않아 삭제된 행이 없음
pub async fn delete_ad(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM ads WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
