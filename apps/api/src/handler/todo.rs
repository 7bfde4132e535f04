//! # Todo アイテムハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /todos` - Todo アイテムの追加
//! - `PUT /todos/{todo_id}` - ステータス変更
//!
//! いずれも `Authorization` ヘッダによる認可が必要。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::HeaderMap,
   response::IntoResponse,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::TodoStatus;

use crate::{
   error::ApiError,
   extract::{JsonBody, RequestBody},
   usecase::{CreateTodoInput, SessionService, TodoItemDetail, TodoUseCaseImpl},
};

/// Todo リスト・Todo アイテム API の共有状態
pub struct TodoState {
   pub session: SessionService,
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 追加リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
   #[serde(default)]
   pub description:  String,
   #[serde(default)]
   pub todo_list_id: String,
}

impl RequestBody for CreateTodoRequest {
   fn has_required_fields(&self) -> bool {
      !self.description.is_empty() && !self.todo_list_id.is_empty()
   }
}

/// ステータス変更リクエスト
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
   #[serde(default)]
   pub status: String,
}

impl RequestBody for UpdateTodoRequest {
   fn has_required_fields(&self) -> bool {
      !self.status.is_empty()
   }
}

/// Todo アイテム DTO
///
/// `created_by` は作成者の表示名。`updated_at` は秒精度の RFC 3339（UTC は `Z`）。
#[derive(Debug, Serialize, PartialEq)]
pub struct TodoItemDto {
   pub id:          String,
   pub created_by:  String,
   pub description: String,
   pub status:      TodoStatus,
   pub updated_at:  String,
}

impl From<TodoItemDetail> for TodoItemDto {
   fn from(detail: TodoItemDetail) -> Self {
      let item = detail.item;
      Self {
         id:          item.id().to_string(),
         created_by:  detail.created_by_name,
         description: item.description().to_string(),
         status:      item.status(),
         updated_at:  item.updated_at().to_rfc3339_opts(SecondsFormat::Secs, true),
      }
   }
}

// --- ハンドラ ---

/// POST /todos
///
/// ## レスポンス
///
/// - `200 OK`: 追加したアイテム
/// - `400 Bad Request`: ボディ不正、`invalid description`、`invalid todo list`、
///   `todo list does not exist`
/// - `401 Unauthorized`: `invalid access token`、`account not found`
#[tracing::instrument(skip_all)]
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   headers: HeaderMap,
   JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let account_number = state.session.authorize(&headers).await?;

   let input = CreateTodoInput {
      list_id:     req.todo_list_id,
      description: req.description,
   };
   let detail = state.usecase.create_todo(input, account_number).await?;

   Ok(Json(TodoItemDto::from(detail)))
}

/// PUT /todos/{todo_id}
///
/// ## レスポンス
///
/// - `200 OK`: 変更後のアイテム
/// - `400 Bad Request`: ボディ不正、`invalid status`、`invalid todo`、`todo does not exist`
/// - `401 Unauthorized`: `invalid access token`、`account not found`
#[tracing::instrument(skip_all, fields(todo_id = %todo_id))]
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   Path(todo_id): Path<String>,
   headers: HeaderMap,
   JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
   state.session.authorize(&headers).await?;

   let detail = state
      .usecase
      .update_todo_status(&todo_id, &req.status)
      .await?;

   Ok(Json(TodoItemDto::from(detail)))
}

#[cfg(test)]
mod tests {
   use chrono::DateTime;
   use pretty_assertions::assert_eq;
   use todoflow_domain::{
      todo::{TodoDescription, TodoId, TodoItem, TodoListId},
      user::AccountNumber,
   };

   use super::*;

   #[test]
   fn test_dtoのjson形状() {
      let item = TodoItem::new(
         TodoId::parse("f2d869a8-e5bc-4fbf-ad71-444444444444").unwrap(),
         TodoListId::parse("f2d869a8-e5bc-4fbf-ad71-333333333333").unwrap(),
         TodoDescription::new("buy milk").unwrap(),
         AccountNumber::parse("f2d869a8-e5bc-4fbf-ad71-000000000000").unwrap(),
         DateTime::from_timestamp(1_704_067_200, 0).unwrap(),
      );
      let detail = TodoItemDetail {
         item,
         created_by_name: "Alice".to_string(),
      };

      let json = serde_json::to_value(TodoItemDto::from(detail)).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "id": "f2d869a8-e5bc-4fbf-ad71-444444444444",
            "created_by": "Alice",
            "description": "buy milk",
            "status": "todo",
            "updated_at": "2024-01-01T00:00:00Z"
         })
      );
   }
}
