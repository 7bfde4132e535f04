//! # ヘルスチェック共通型

use serde::Serialize;

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use todoflow_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
   /// 稼働状態（`"healthy"` または `"unhealthy"`）
   pub status:  String,
   /// アプリケーションバージョン
   pub version: String,
}

impl HealthResponse {
   /// 稼働中を示すレスポンスを作成する
   pub fn healthy(version: impl Into<String>) -> Self {
      Self {
         status:  "healthy".to_string(),
         version: version.into(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_health_responseのserializeで正しいjson形状にする() {
      let json = serde_json::to_value(HealthResponse::healthy("0.1.0")).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "status": "healthy",
            "version": "0.1.0"
         })
      );
   }
}
