//! # エラーレスポンス
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ```json
//! { "error": "invalid todo list" }
//! ```
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスとの対応付けと `IntoResponse` 変換は API 側で行う
//! - メッセージはクライアントがそのまま比較できる固定文言とする

use serde::{Deserialize, Serialize};

/// 内部エラー時にクライアントへ返す固定メッセージ
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error: error.into(),
      }
   }

   /// 500 Internal Server Error 用
   ///
   /// メッセージは固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(INTERNAL_ERROR_MESSAGE)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_errorフィールドのみを持つjsonにシリアライズされる() {
      let json = serde_json::to_value(ErrorResponse::new("invalid todo list")).unwrap();

      assert_eq!(json, serde_json::json!({ "error": "invalid todo list" }));
   }

   #[test]
   fn test_internal_errorは固定メッセージを返す() {
      assert_eq!(ErrorResponse::internal_error().error, "internal server error");
   }

   #[test]
   fn test_jsonデシリアライズが正しく動作する() {
      let error: ErrorResponse =
         serde_json::from_str(r#"{"error": "account not found"}"#).unwrap();

      assert_eq!(error, ErrorResponse::new("account not found"));
   }
}
