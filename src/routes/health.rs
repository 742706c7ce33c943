//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /api/v1/health` → `{ "status": "ok" }` (인증 불필요)
//!
//! 로드밸런서나 컨테이너 오케스트레이터가 서버 가동 여부를 확인할 때 사용합니다.

use axum::Json;
use serde_json::{json, Value};

/// State, Path 등 추출자가 없는 가장 단순한 핸들러. 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
