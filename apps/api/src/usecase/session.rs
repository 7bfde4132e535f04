//! # 認可
//!
//! `Authorization` ヘッダのアクセストークンをアカウント番号に解決する。
//!
//! ヘッダ値はトークンそのもの。`Bearer ` 接頭辞が付いていれば取り除く。
//! ヘッダがない場合は空のトークンとして扱い、形式エラーになる。

use std::sync::Arc;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use todoflow_domain::user::AccountNumber;
use todoflow_infra::TodoStore;

use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// 認可サービス
pub struct SessionService {
   store: Arc<dyn TodoStore>,
}

impl SessionService {
   pub fn new(store: Arc<dyn TodoStore>) -> Self {
      Self { store }
   }

   /// リクエストヘッダを認可し、アカウント番号を返す
   ///
   /// 失敗はすべて `ApiError::Unauthorized` になる。
   pub async fn authorize(&self, headers: &HeaderMap) -> Result<AccountNumber, ApiError> {
      let token = access_token(headers);

      self.store.authorize(token).await.map_err(|error| {
         tracing::debug!(%error, "認可に失敗しました");
         ApiError::unauthorized(error)
      })
   }
}

/// ヘッダからアクセストークン文字列を取り出す
fn access_token(headers: &HeaderMap) -> &str {
   let value = headers
      .get(AUTHORIZATION)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default();

   value.strip_prefix(BEARER_PREFIX).unwrap_or(value)
}
