//! # 광고(Ad) 모델 정의
//!
//! ## 구조체 역할
//! - `Ad`: 데이터베이스에 저장된 광고 (응답용)
//! - `AdWithUser`: 소유자 정보(`user`)가 포함된 광고 (`GET /ads` 응답)
//! - `AdUser`: `AdWithUser`에 포함되는 소유자 요약 정보
//! - `AdInput`: 광고 생성/수정 시 클라이언트가 보내는 JSON 본문
//! - `AdListQuery`: 전체 광고 목록 조회의 쿼리 스트링
//!
//! `id`, `user_id`, 타임스탬프는 서버가 부여합니다.
//! 그래서 `AdInput`은 네 필드만 받고, 그 외 필드가 오면 역직렬화 단계에서 거부합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 목록 조회 시 `limit`이 없을 때 사용하는 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// 광고 엔티티 — DB의 `ads` 테이블 한 행(row)에 대응합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub city: String,
    pub postal_code: String,
    /// 광고 소유자 ID
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// 광고에 포함되는 소유자 요약 (`{ id, first_name, last_name }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// 소유자 정보가 포함된 광고.
///
/// `#[serde(flatten)]`: `ad`의 필드들을 중첩 객체가 아닌 같은 레벨로 펼쳐서 직렬화합니다.
/// 결과: `{ "id": 1, "title": "...", ..., "user": { "id": 5, ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdWithUser {
    #[serde(flatten)]
    pub ad: Ad,
    pub user: AdUser,
}

/// `ads JOIN users` 쿼리 결과 한 행.
///
/// SQL 결과는 평평한(flat) 컬럼 목록이므로 먼저 이 구조체로 받은 뒤
/// `From` 변환으로 `AdWithUser`의 중첩 구조를 만듭니다.
#[derive(Debug, sqlx::FromRow)]
pub struct AdWithUserRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub city: String,
    pub postal_code: String,
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<AdWithUserRow> for AdWithUser {
    fn from(row: AdWithUserRow) -> Self {
        Self {
            user: AdUser {
                id: row.user_id,
                first_name: row.first_name,
                last_name: row.last_name,
            },
            ad: Ad {
                id: row.id,
                title: row.title,
                content: row.content,
                city: row.city,
                postal_code: row.postal_code,
                user_id: row.user_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

/// 광고 생성/수정 요청 본문.
///
/// `POST /user/{id}/ads`와 `PUT /ads/{id}`가 같은 스키마를 사용합니다.
/// PUT은 전체 교체이므로 네 필드 모두 필수입니다.
///
/// - `#[serde(deny_unknown_fields)]`: `id`, `user_id` 같은 정의되지 않은 필드가 오면 400
/// - `#[validate(...)]`: 역직렬화 후 `ValidatedJson`이 실행하는 규칙
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AdInput {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(length(min = 1, max = 2000), custom(function = "validate_not_blank"))]
    pub content: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub city: String,
    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: String,
}

/// `GET /ads`의 쿼리 스트링 스키마.
///
/// 예: `/ads?city=Paris&limit=20`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AdListQuery {
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(custom(function = "validate_postal_code"))]
    pub postal_code: Option<String>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl AdListQuery {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}

/// 공백만으로 이루어진 문자열을 거부합니다.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// 우편번호: 정확히 5자리 숫자 (예: "75000")
fn validate_postal_code(value: &str) -> Result<(), ValidationError> {
    if value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("postal_code"))
    }
}
