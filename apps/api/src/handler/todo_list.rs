//! # Todo リストハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /todolists` - 空の Todo リストを作成
//! - `GET /todolists/{list_id}` - アイテム一覧（追加順）
//!
//! いずれも `Authorization` ヘッダによる認可が必要。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::HeaderMap,
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use super::todo::{TodoItemDto, TodoState};
use crate::{
   error::ApiError,
   extract::{JsonBody, RequestBody},
};

// --- リクエスト/レスポンス型 ---

/// Todo リスト作成リクエスト（フィールドなし。`{}` のみ受け付ける）
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoListRequest {}

impl RequestBody for CreateTodoListRequest {}

/// Todo リスト作成レスポンス
#[derive(Debug, Serialize)]
pub struct CreateTodoListResponse {
   pub todo_list_id: String,
}

/// Todo リスト取得レスポンス
#[derive(Debug, Serialize)]
pub struct GetTodoListResponse {
   pub todos: Vec<TodoItemDto>,
}

// --- ハンドラ ---

/// POST /todolists
///
/// ## レスポンス
///
/// - `200 OK`: `{"todo_list_id": "..."}`
/// - `400 Bad Request`: ボディ不正
/// - `401 Unauthorized`: `invalid access token`、`account not found`
#[tracing::instrument(skip_all)]
pub async fn create_todo_list(
   State(state): State<Arc<TodoState>>,
   headers: HeaderMap,
   JsonBody(_req): JsonBody<CreateTodoListRequest>,
) -> Result<impl IntoResponse, ApiError> {
   state.session.authorize(&headers).await?;

   let list_id = state.usecase.create_todo_list().await;

   Ok(Json(CreateTodoListResponse {
      todo_list_id: list_id.to_string(),
   }))
}

/// GET /todolists/{list_id}
///
/// ## レスポンス
///
/// - `200 OK`: `{"todos": [...]}`（空のリストは `[]`）
/// - `400 Bad Request`: `invalid todo list`、`todo list does not exist`
/// - `401 Unauthorized`: `invalid access token`、`account not found`
#[tracing::instrument(skip_all, fields(list_id = %list_id))]
pub async fn get_todo_list(
   State(state): State<Arc<TodoState>>,
   Path(list_id): Path<String>,
   headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
   state.session.authorize(&headers).await?;

   let details = state.usecase.get_todo_list(&list_id).await?;

   Ok(Json(GetTodoListResponse {
      todos: details.into_iter().map(TodoItemDto::from).collect(),
   }))
}
