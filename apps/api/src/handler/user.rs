//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /users/register` - ユーザー登録
//! - `POST /users/login` - アクセストークン発行
//!
//! どちらも認可不要。

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
   error::ApiError,
   extract::{JsonBody, RequestBody},
   usecase::UserUseCaseImpl,
};

/// ユーザー API の共有状態
pub struct UserState {
   pub usecase: UserUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ユーザー登録リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
   #[serde(default)]
   pub name: String,
}

impl RequestBody for RegisterRequest {
   fn has_required_fields(&self) -> bool {
      !self.name.is_empty()
   }
}

/// ユーザー登録レスポンス
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
   pub account_number: String,
}

/// ログインリクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
   #[serde(default)]
   pub account_number: String,
}

impl RequestBody for LoginRequest {
   fn has_required_fields(&self) -> bool {
      !self.account_number.is_empty()
   }
}

/// ログインレスポンス
#[derive(Debug, Serialize)]
pub struct LoginResponse {
   pub access_token: String,
}

// --- ハンドラ ---

/// POST /users/register
///
/// ## レスポンス
///
/// - `200 OK`: `{"account_number": "..."}`
/// - `400 Bad Request`: ボディ不正、`invalid user name`
#[tracing::instrument(skip_all)]
pub async fn register_user(
   State(state): State<Arc<UserState>>,
   JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let account_number = state.usecase.register(req.name).await?;

   Ok(Json(RegisterResponse {
      account_number: account_number.to_string(),
   }))
}

/// POST /users/login
///
/// ## レスポンス
///
/// - `200 OK`: `{"access_token": "..."}`
/// - `400 Bad Request`: ボディ不正、`invalid account number`、`account not found`
#[tracing::instrument(skip_all)]
pub async fn login(
   State(state): State<Arc<UserState>>,
   JsonBody(req): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let token = state.usecase.login(&req.account_number).await?;

   Ok(Json(LoginResponse {
      access_token: token.to_string(),
   }))
}
