//! # ヘルスチェックハンドラ
//!
//! `/health`: Liveness Check（常に `"healthy"` を返す）

use aws_communication_shared::HealthResponse;
use axum::Json;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
