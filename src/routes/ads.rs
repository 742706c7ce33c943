//! # 광고(Ad) 라우트 테이블과 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 처리 순서 | 성공 |
//! |--------|------|-----------|------|
//! | GET | /api/v1/user/{id}/ads | 인증 → `list_user_ads` | 200 `[Ad]` |
//! | POST | /api/v1/user/{id}/ads | 인증 → 본문 검증 → `create_user_ad` | 201 `Ad` |
//! | GET | /api/v1/ads | 인증 → 쿼리 검증 → `list_ads` | 200 `[AdWithUser]` |
//! | PUT | /api/v1/ads/{id} | 인증 → 본문 검증 → `update_ad` | 200 `Ad` |
//! | DELETE | /api/v1/ads/{id} | 인증 → `delete_ad` | 204 |
//!
//! ## 처리 순서 = 인자 순서
//! Axum은 핸들러 인자(추출자)를 왼쪽부터 차례로 실행하고, 첫 실패에서 바로 응답합니다.
//! 그래서 모든 핸들러는 `NumericId`(404) → `AuthUser`(401) → `Validated*`(400) 순서로 인자를 받습니다.
//! 핸들러 본문은 서비스 호출 하나뿐이며, 서비스의 `AdError`는 `?`로 `AppError`가 되어
//! 중앙 매핑(`error.rs`)에서 상태 코드로 바뀝니다.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::{
    error::AppError,
    middleware::{AuthUser, NumericId, ValidatedJson, ValidatedQuery},
    models::*,
    state::AppState,
};

/// 광고 라우트 테이블.
///
/// `{id}`는 Axum 0.8의 경로 파라미터 문법입니다. 숫자 제약은 `NumericId`가 담당합니다.
pub fn ad_routes() -> Router<AppState> {
    Router::new()
        .route("/user/{id}/ads", get(list_user_ads).post(create_user_ad))
        .route("/ads", get(list_ads))
        .route("/ads/{id}", put(update_ad).delete(delete_ad))
}

/// `GET /user/{id}/ads` — 한 사용자의 광고 목록
pub async fn list_user_ads(
    State(state): State<AppState>,
    NumericId(user_id): NumericId,
    auth_user: AuthUser,
) -> Result<Json<Vec<Ad>>, AppError> {
    let ads = state.ads.list_by_user(&auth_user, user_id).await?;
    Ok(Json(ads))
}

/// `POST /user/{id}/ads` — 사용자 명의로 광고 생성
///
/// `(StatusCode, Json<Ad>)` 튜플을 반환하면 201 Created와 본문을 함께 보낼 수 있습니다.
pub async fn create_user_ad(
    State(state): State<AppState>,
    NumericId(user_id): NumericId,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<AdInput>,
) -> Result<(StatusCode, Json<Ad>), AppError> {
    let ad = state.ads.create_for_user(&auth_user, user_id, input).await?;
    Ok((StatusCode::CREATED, Json(ad)))
}

/// `GET /ads` — 소유자 정보가 포함된 전체 광고 목록
pub async fn list_ads(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<AdListQuery>,
) -> Result<Json<Vec<AdWithUser>>, AppError> {
    let ads = state.ads.list_all(&auth_user, query).await?;
    Ok(Json(ads))
}

/// `PUT /ads/{id}` — 광고 수정 (전체 교체)
pub async fn update_ad(
    State(state): State<AppState>,
    NumericId(ad_id): NumericId,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<AdInput>,
) -> Result<Json<Ad>, AppError> {
    let ad = state.ads.update(&auth_user, ad_id, input).await?;
    Ok(Json(ad))
}

/// `DELETE /ads/{id}` — 광고 삭제, 성공 시 본문 없는 204
pub async fn delete_ad(
    State(state): State<AppState>,
    NumericId(ad_id): NumericId,
    auth_user: AuthUser,
) -> Result<StatusCode, AppError> {
    state.ads.delete(&auth_user, ad_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
