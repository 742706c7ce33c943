//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `ad`: 광고(Ad) 엔티티와 생성/수정 본문, 목록 조회 쿼리 스키마
//! - `user`: 광고 소유자(User) 엔티티
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Ad`처럼 짧게 접근합니다.

pub mod ad;
pub mod user;

pub use ad::*;
pub use user::*;
