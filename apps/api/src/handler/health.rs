//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! {"status":"healthy","version":"0.1.0"}
//! ```
//!
//! ストアの状態は確認せず、プロセスが応答できることのみを返す。

use axum::Json;
use todoflow_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
