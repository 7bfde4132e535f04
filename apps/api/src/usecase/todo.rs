//! # Todo ユースケース
//!
//! Todo リストの作成・取得と、Todo アイテムの追加・ステータス変更を扱う。
//!
//! ## 検証順序
//!
//! 認可は呼び出し元（ハンドラ）で済ませてある前提とする。
//! ここではフィールド値の検証を先に行い、その後にストアで存在を確認する。
//!
//! ## 作成者名の解決
//!
//! アイテムは作成者をアカウント番号で保持し、表示名は読み出しのたびに
//! ストアから引き直す。ユーザーが見つからない場合はアカウント番号をそのまま使う。

use std::{collections::HashMap, sync::Arc};

use todoflow_domain::{
   clock::Clock,
   todo::{TodoDescription, TodoItem, TodoListId, TodoStatus},
   user::AccountNumber,
};
use todoflow_infra::TodoStore;

use crate::error::ApiError;

/// Todo 追加の入力
pub struct CreateTodoInput {
   pub list_id:     String,
   pub description: String,
}

/// 作成者名を解決済みの Todo アイテム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemDetail {
   pub item:            TodoItem,
   pub created_by_name: String,
}

/// Todo ユースケース
pub struct TodoUseCaseImpl {
   store: Arc<dyn TodoStore>,
   clock: Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
   pub fn new(store: Arc<dyn TodoStore>, clock: Arc<dyn Clock>) -> Self {
      Self { store, clock }
   }

   /// 空の Todo リストを作成する
   pub async fn create_todo_list(&self) -> TodoListId {
      let list_id = self.store.create_todo_list().await;

      tracing::info!(todo_list_id = %list_id, "Todo リストを作成しました");
      list_id
   }

   /// Todo リストのアイテムを追加順で取得する
   pub async fn get_todo_list(&self, list_id: &str) -> Result<Vec<TodoItemDetail>, ApiError> {
      let items = self.store.get_todos(list_id).await?;
      let names = self.resolve_creator_names(&items).await;

      Ok(items
         .into_iter()
         .map(|item| {
            let created_by_name = creator_name(&names, item.created_by());
            TodoItemDetail {
               item,
               created_by_name,
            }
         })
         .collect())
   }

   /// Todo アイテムをリストの末尾に追加する
   ///
   /// 1. 説明の検証
   /// 2. リストの存在確認と追加（ストア）
   pub async fn create_todo(
      &self,
      input: CreateTodoInput,
      created_by: AccountNumber,
   ) -> Result<TodoItemDetail, ApiError> {
      let description = TodoDescription::new(input.description)?;

      let item = self
         .store
         .create_todo(&input.list_id, description, created_by)
         .await?;

      tracing::info!(todo_id = %item.id(), todo_list_id = %item.list_id(), "Todo を追加しました");
      Ok(self.detail(item).await)
   }

   /// Todo アイテムのステータスを変更する
   ///
   /// 任意のステータスから任意のステータスへ遷移できる。
   /// 同じステータスを指定した場合も `updated_at` は更新される。
   ///
   /// 1. ステータスの検証
   /// 2. アイテムの取得
   /// 3. ステータス変更と書き戻し
   pub async fn update_todo_status(
      &self,
      todo_id: &str,
      status: &str,
   ) -> Result<TodoItemDetail, ApiError> {
      let status: TodoStatus = status.parse()?;

      let item = self.store.get_todo(todo_id).await?;
      let previous = item.status();
      let updated = item.with_status(status, self.clock.now());
      self.store.update_todo(updated.clone()).await?;

      tracing::info!(
         todo_id = %updated.id(),
         from = %previous,
         to = %status,
         "Todo のステータスを変更しました"
      );
      Ok(self.detail(updated).await)
   }

   async fn detail(&self, item: TodoItem) -> TodoItemDetail {
      let names = self.resolve_creator_names(std::slice::from_ref(&item)).await;
      let created_by_name = creator_name(&names, item.created_by());

      TodoItemDetail {
         item,
         created_by_name,
      }
   }

   /// アイテムの作成者のアカウント番号から表示名へのマップを作る
   async fn resolve_creator_names(&self, items: &[TodoItem]) -> HashMap<AccountNumber, String> {
      let mut account_numbers: Vec<AccountNumber> =
         items.iter().map(|item| item.created_by().clone()).collect();
      account_numbers.sort_by(|a, b| a.as_str().cmp(b.as_str()));
      account_numbers.dedup();

      self
         .store
         .find_users(&account_numbers)
         .await
         .into_iter()
         .map(|user| (user.account_number().clone(), user.name().to_string()))
         .collect()
   }
}

fn creator_name(names: &HashMap<AccountNumber, String>, account_number: &AccountNumber) -> String {
   names
      .get(account_number)
      .cloned()
      .unwrap_or_else(|| account_number.to_string())
}
