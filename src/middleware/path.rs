//! # 숫자 ID 경로 파라미터
//!
//! `/user/{id}/ads`, `/ads/{id}`의 `{id}`는 10진수 숫자(1자리 이상)만 허용합니다.
//! 숫자가 아니면 라우트가 매칭되지 않은 것과 같게 404를 돌려주고, 핸들러에는 도달하지 않습니다.
//!
//! 핸들러 인자 목록에서 `AuthUser`보다 앞에 두어 인증보다 먼저 실행되게 합니다.
//! (존재하지 않는 경로는 토큰이 없어도 401이 아니라 404)

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// 경로에서 추출한 숫자 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId(pub i64);

impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        parse_numeric_id(&raw).map(NumericId).ok_or_else(|| {
            tracing::debug!(raw = %raw, "Non-numeric id in path");
            AppError::NotFound
        })
    }
}

/// `^[0-9]+$`에 맞고 i64 범위 안이면 Some.
///
/// `str::parse::<i64>()`는 "+5", "-1"도 받아들이므로 먼저 모든 문자가 숫자인지 확인합니다.
pub fn parse_numeric_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_digits() {
        assert_eq!(parse_numeric_id("5"), Some(5));
        assert_eq!(parse_numeric_id("007"), Some(7));
        assert_eq!(parse_numeric_id("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "abc", "12a", "+5", "-1", " 5", "1.0", "9223372036854775808"] {
            assert_eq!(parse_numeric_id(raw), None, "{raw:?}");
        }
    }
}
