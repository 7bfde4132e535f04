//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError)
//!        ↓ 変換（認可失敗のみ Unauthorized、それ以外は BadRequest）
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + {"error": "..."})
//! ```
//!
//! ドメインエラーのメッセージはそのままクライアントに返す。
//! 内部エラーの詳細はログにのみ出力する。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todoflow_domain::DomainError;
use todoflow_shared::ErrorResponse;

/// リクエストボディが JSON として解釈できない、または未知のフィールドを含む
pub const INVALID_BODY: &str = "invalid body";

/// リクエストボディの必須フィールドが欠けている、または途中で途切れている
pub const VALIDATION_ERROR: &str = "validation error";

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 400 Bad Request（形式違反・検証失敗・不在）
   #[error("{0}")]
   BadRequest(String),

   /// 401 Unauthorized（アクセストークンが不正または未登録）
   #[error("{0}")]
   Unauthorized(String),

   /// 500 Internal Server Error
   #[error("内部エラー: {0}")]
   Internal(#[from] anyhow::Error),
}

impl ApiError {
   /// 認可失敗として扱う
   pub fn unauthorized(error: DomainError) -> Self {
      Self::Unauthorized(error.to_string())
   }
}

impl From<DomainError> for ApiError {
   fn from(error: DomainError) -> Self {
      Self::BadRequest(error.to_string())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
         ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg)),
         ApiError::Internal(err) => {
            tracing::error!("内部エラー: {:?}", err);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
