//! # リクエストボディ抽出
//!
//! `axum::Json` の代わりに使う JSON ボディ抽出器。
//! パース失敗を `ApiError::BadRequest` に変換し、
//! 全エンドポイントで同じエラー文言を返す。
//!
//! | 入力 | エラー |
//! |------|--------|
//! | 空のボディ | `invalid body` |
//! | JSON の構文エラー・型の不一致・未知のフィールド | `invalid body` |
//! | 途中で途切れた JSON | `validation error` |
//! | 必須フィールドの欠落・空文字列 | `validation error` |
//!
//! 未知のフィールドを拒否するため、リクエスト型には
//! `#[serde(deny_unknown_fields)]` を付ける。必須フィールドは `#[serde(default)]`
//! で受け取り、[`RequestBody::has_required_fields`] で検査する。

use axum::{
   body::Bytes,
   extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{ApiError, INVALID_BODY, VALIDATION_ERROR};

/// JSON リクエストボディとして受け付ける型
pub trait RequestBody: DeserializeOwned {
   /// 必須フィールドがすべて埋まっているか
   fn has_required_fields(&self) -> bool {
      true
   }
}

/// JSON ボディ抽出器
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
   T: RequestBody,
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
         if rejection.status().is_client_error() {
            ApiError::BadRequest(INVALID_BODY.to_string())
         } else {
            ApiError::Internal(anyhow::Error::new(rejection))
         }
      })?;

      parse_body(&bytes).map(Self)
   }
}

/// バイト列をリクエスト型にパースする
fn parse_body<T: RequestBody>(bytes: &[u8]) -> Result<T, ApiError> {
   let body: T = serde_json::from_slice(bytes).map_err(|error| {
      tracing::debug!(%error, "リクエストボディのパースに失敗しました");
      let message = match error.classify() {
         Category::Eof if !bytes.trim_ascii().is_empty() => VALIDATION_ERROR,
         _ => INVALID_BODY,
      };
      ApiError::BadRequest(message.to_string())
   })?;

   if !body.has_required_fields() {
      return Err(ApiError::BadRequest(VALIDATION_ERROR.to_string()));
   }

   Ok(body)
}
