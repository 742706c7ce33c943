//! # 광고 서비스 (컨트롤러 계층)
//!
//! 라우트 핸들러가 호출하는 비즈니스 로직입니다. 라우터는 "유효한 토큰이 있는가"까지만 확인하고,
//! 소유자/역할에 따른 권한 판단(403)은 모두 이 계층에서 합니다.
//!
//! - `AdService`: 작업(operation)마다 하나씩 메서드를 가진 트레이트.
//!   `AppState`에 `Arc<dyn AdService>`로 들어가므로 테스트에서 가짜 구현으로 바꿔 끼울 수 있습니다.
//! - `SqliteAdService`: SQLite(`db::ads`) 기반의 실제 구현
//! - `AdError`: 서비스가 돌려주는 타입이 있는 실패. `From<AdError> for AppError`가
//!   상태 코드로 바꾸는 유일한 지점입니다.

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::{
    db,
    error::AppError,
    middleware::auth::AuthUser,
    models::{Ad, AdInput, AdListQuery, AdWithUser},
};

/// 광고 서비스가 반환하는 실패 종류
#[derive(Debug, Error)]
pub enum AdError {
    #[error("ad {0} not found")]
    AdNotFound(i64),

    #[error("user {0} not found")]
    UserNotFound(i64),

    /// 다른 사용자의 광고를 만들거나 수정/삭제하려는 경우
    #[error("user {actor} may not manage ads owned by user {owner}")]
    Forbidden { actor: i64, owner: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<AdError> for AppError {
    fn from(err: AdError) -> Self {
        match err {
            AdError::AdNotFound(_) | AdError::UserNotFound(_) => AppError::NotFound,
            // 누가 소유자인지는 응답에 싣지 않습니다
            AdError::Forbidden { .. } => {
                AppError::Forbidden("You are not allowed to manage this ad".to_string())
            }
            AdError::Database(e) => AppError::Database(e),
        }
    }
}

/// 광고 작업 하나당 메서드 하나.
///
/// 모든 메서드는 인증된 사용자(`principal`)를 받습니다.
/// `Send + Sync`: 여러 요청(스레드)이 동시에 같은 서비스를 공유하기 위해 필요합니다.
#[async_trait]
pub trait AdService: Send + Sync {
    /// `GET /user/{id}/ads`
    async fn list_by_user(&self, principal: &AuthUser, user_id: i64) -> Result<Vec<Ad>, AdError>;

    /// `POST /user/{id}/ads`
    async fn create_for_user(
        &self,
        principal: &AuthUser,
        user_id: i64,
        input: AdInput,
    ) -> Result<Ad, AdError>;

    /// `GET /ads`
    async fn list_all(
        &self,
        principal: &AuthUser,
        query: AdListQuery,
    ) -> Result<Vec<AdWithUser>, AdError>;

    /// `PUT /ads/{id}`
    async fn update(&self, principal: &AuthUser, ad_id: i64, input: AdInput) -> Result<Ad, AdError>;

    /// `DELETE /ads/{id}`
    async fn delete(&self, principal: &AuthUser, ad_id: i64) -> Result<(), AdError>;
}

/// 소유자 본인이거나 관리자이면 통과합니다.
pub fn ensure_can_manage(principal: &AuthUser, owner_id: i64) -> Result<(), AdError> {
    if principal.is_admin() || principal.user_id == owner_id {
        return Ok(());
    }

    tracing::warn!(
        actor = principal.user_id,
        owner = owner_id,
        "Rejected ad operation on another user's ad"
    );
    Err(AdError::Forbidden {
        actor: principal.user_id,
        owner: owner_id,
    })
}

/// SQLite 기반 `AdService` 구현
#[derive(Clone)]
pub struct SqliteAdService {
    pool: SqlitePool,
}

impl SqliteAdService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 광고를 조회하고, 없으면 `AdNotFound`, 권한이 없으면 `Forbidden`을 반환합니다.
    async fn owned_ad(&self, principal: &AuthUser, ad_id: i64) -> Result<Ad, AdError> {
        let ad = db::get_ad(&self.pool, ad_id)
            .await?
            .ok_or(AdError::AdNotFound(ad_id))?;
        ensure_can_manage(principal, ad.user_id)?;
        Ok(ad)
    }
}

#[async_trait]
impl AdService for SqliteAdService {
    async fn list_by_user(&self, _principal: &AuthUser, user_id: i64) -> Result<Vec<Ad>, AdError> {
        // 존재하지 않는 사용자는 빈 목록이 됩니다
        Ok(db::list_ads_by_user(&self.pool, user_id).await?)
    }

    async fn create_for_user(
        &self,
        principal: &AuthUser,
        user_id: i64,
        input: AdInput,
    ) -> Result<Ad, AdError> {
        ensure_can_manage(principal, user_id)?;

        if principal.user_id == user_id {
            db::users::ensure_exists(&self.pool, user_id).await?;
        } else if !db::users::exists(&self.pool, user_id).await? {
            // 관리자가 다른 사용자 명의로 만들 때는 대상 사용자가 이미 있어야 합니다
            return Err(AdError::UserNotFound(user_id));
        }

        let ad = db::create_ad(&self.pool, user_id, &input).await?;
        tracing::info!(ad_id = ad.id, user_id, "Ad created");
        Ok(ad)
    }

    async fn list_all(
        &self,
        _principal: &AuthUser,
        query: AdListQuery,
    ) -> Result<Vec<AdWithUser>, AdError> {
        Ok(db::list_ads_with_user(&self.pool, &query).await?)
    }

    async fn update(&self, principal: &AuthUser, ad_id: i64, input: AdInput) -> Result<Ad, AdError> {
        self.owned_ad(principal, ad_id).await?;

        // 확인과 갱신 사이에 삭제되었을 수도 있으므로 None이면 404로 처리합니다
        let ad = db::update_ad(&self.pool, ad_id, &input)
            .await?
            .ok_or(AdError::AdNotFound(ad_id))?;
        tracing::info!(ad_id, actor = principal.user_id, "Ad updated");
        Ok(ad)
    }

    async fn delete(&self, principal: &AuthUser, ad_id: i64) -> Result<(), AdError> {
        // 소유자 확인을 통과한 경우에만 DELETE 문을 실행합니다
        self.owned_ad(principal, ad_id).await?;

        if !db::delete_ad(&self.pool, ad_id).await? {
            return Err(AdError::AdNotFound(ad_id));
        }
        tracing::info!(ad_id, actor = principal.user_id, "Ad deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::Role;

    fn user(id: i64) -> AuthUser {
        AuthUser {
            user_id: id,
            role: Role::User,
        }
    }

    #[test]
    fn owner_may_manage_own_ads() {
        assert!(ensure_can_manage(&user(1), 1).is_ok());
    }

    #[test]
    fn other_user_is_forbidden() {
        let err = ensure_can_manage(&user(1), 2).unwrap_err();
        assert!(matches!(err, AdError::Forbidden { actor: 1, owner: 2 }));
    }

    #[test]
    fn admin_bypasses_ownership() {
        let admin = AuthUser {
            user_id: 1,
            role: Role::Admin,
        };
        assert!(ensure_can_manage(&admin, 2).is_ok());
    }

    #[test]
    fn forbidden_maps_to_403_without_owner_details() {
        let app_err = AppError::from(AdError::Forbidden { actor: 1, owner: 2 });
        assert_eq!(app_err.status(), axum::http::StatusCode::FORBIDDEN);
        assert!(!app_err.to_string().contains('2'));
    }

    #[test]
    fn missing_records_map_to_404() {
        assert!(matches!(AppError::from(AdError::AdNotFound(9)), AppError::NotFound));
        assert!(matches!(AppError::from(AdError::UserNotFound(9)), AppError::NotFound));
    }
}
