//! # 요청 스키마 검증 추출자
//!
//! `ValidatedJson<T>` / `ValidatedQuery<T>`는 요청 본문/쿼리 스트링을 `T`로 역직렬화한 뒤
//! `T`에 선언된 `#[validate(...)]` 규칙을 실행합니다. 실패하면 핸들러 전에 400으로 끝납니다.
//!
//! - 잘못된 JSON, 필수 필드 누락, 정의되지 않은 필드 → `AppError::BadRequest`
//! - 길이/형식 규칙 위반 → `AppError::Validation`
//!
//! Axum은 본문을 읽는 추출자(`FromRequest`)를 항상 마지막에 실행하므로,
//! `ValidatedJson`은 자연스럽게 `AuthUser` 다음에 실행됩니다.
//! `ValidatedQuery`는 `FromRequestParts`이므로 핸들러 인자에서 `AuthUser` 뒤에 두어야 합니다.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// 검증을 통과한 JSON 본문
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Axum 기본 Json 거부 응답은 422이므로, 본문 텍스트만 가져와 400으로 바꿉니다
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// 검증을 통과한 쿼리 스트링
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
