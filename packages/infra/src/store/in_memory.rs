//! # インメモリストア
//!
//! プロセス内のマップで全エンティティを保持する [`TodoStore`] 実装。
//! プロセス終了とともにデータは失われる。
//!
//! ## 排他制御
//!
//! すべてのマップを 1 つの `RwLock` で保護する。各操作はロックを 1 回だけ
//! 取得するため、同じリストへの同時追加でアイテムが失われることはなく、
//! Todo ID インデックスの参照と書き戻しが競合することもない。
//!
//! ## Todo ID インデックス
//!
//! `get_todo` はリスト ID を知らずにアイテムを引く必要があるため、
//! `TodoId → (TodoListId, 位置)` のインデックスを追加時に更新する。
//! アイテムは削除されないので、位置は一度決まれば変わらない。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use todoflow_domain::{
   DomainError,
   EntityKind,
   clock::{Clock, SystemClock},
   identifier::{IdGenerator, RandomIdGenerator},
   todo::{TodoDescription, TodoId, TodoItem, TodoListId},
   user::{AccessToken, AccountNumber, User, UserName},
};

use super::TodoStore;

/// ストアが保持する全状態
#[derive(Default)]
struct StoreState {
   users:         HashMap<AccountNumber, User>,
   access_tokens: HashMap<AccessToken, AccountNumber>,
   todo_lists:    HashMap<TodoListId, Vec<TodoItem>>,
   todo_index:    HashMap<TodoId, (TodoListId, usize)>,
}

/// インメモリの [`TodoStore`] 実装
pub struct InMemoryTodoStore {
   state:        RwLock<StoreState>,
   id_generator: Arc<dyn IdGenerator>,
   clock:        Arc<dyn Clock>,
}

impl InMemoryTodoStore {
   /// ランダムな識別子とシステム時刻を使うストアを作成する
   pub fn new() -> Self {
      Self::with_dependencies(Arc::new(RandomIdGenerator), Arc::new(SystemClock))
   }

   /// 識別子生成器と時刻源を指定してストアを作成する
   pub fn with_dependencies(id_generator: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
      Self {
         state: RwLock::new(StoreState::default()),
         id_generator,
         clock,
      }
   }
}

impl Default for InMemoryTodoStore {
   fn default() -> Self {
      Self::new()
   }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
   async fn register_user(&self, name: UserName) -> AccountNumber {
      let account_number = AccountNumber::from_identifier(self.id_generator.generate());
      let user = User::new(account_number.clone(), name);

      self
         .state
         .write()
         .await
         .users
         .insert(account_number.clone(), user);

      tracing::debug!(account_number = %account_number, "ユーザーを登録しました");
      account_number
   }

   async fn find_user(&self, account_number: &AccountNumber) -> Option<User> {
      self.state.read().await.users.get(account_number).cloned()
   }

   async fn find_users(&self, account_numbers: &[AccountNumber]) -> Vec<User> {
      let state = self.state.read().await;
      account_numbers
         .iter()
         .filter_map(|account_number| state.users.get(account_number).cloned())
         .collect()
   }

   async fn login(&self, account_number: &str) -> Result<AccessToken, DomainError> {
      let account_number = AccountNumber::parse(account_number)?;

      let mut state = self.state.write().await;
      if !state.users.contains_key(&account_number) {
         return Err(DomainError::NotFound(EntityKind::Account));
      }

      let token = AccessToken::from_identifier(self.id_generator.generate());
      state
         .access_tokens
         .insert(token.clone(), account_number.clone());

      tracing::debug!(account_number = %account_number, "アクセストークンを発行しました");
      Ok(token)
   }

   async fn authorize(&self, token: &str) -> Result<AccountNumber, DomainError> {
      let token = AccessToken::parse(token)?;

      self
         .state
         .read()
         .await
         .access_tokens
         .get(&token)
         .cloned()
         .ok_or(DomainError::NotFound(EntityKind::AccessToken))
   }

   async fn create_todo_list(&self) -> TodoListId {
      let list_id = TodoListId::from_identifier(self.id_generator.generate());

      self
         .state
         .write()
         .await
         .todo_lists
         .insert(list_id.clone(), Vec::new());

      tracing::debug!(todo_list_id = %list_id, "Todo リストを作成しました");
      list_id
   }

   async fn get_todos(&self, list_id: &str) -> Result<Vec<TodoItem>, DomainError> {
      let list_id = TodoListId::parse(list_id)?;

      self
         .state
         .read()
         .await
         .todo_lists
         .get(&list_id)
         .cloned()
         .ok_or(DomainError::NotFound(EntityKind::TodoList))
   }

   async fn create_todo(
      &self,
      list_id: &str,
      description: TodoDescription,
      created_by: AccountNumber,
   ) -> Result<TodoItem, DomainError> {
      let list_id = TodoListId::parse(list_id)?;

      let mut state = self.state.write().await;
      let StoreState {
         todo_lists,
         todo_index,
         ..
      } = &mut *state;

      let items = todo_lists
         .get_mut(&list_id)
         .ok_or(DomainError::NotFound(EntityKind::TodoList))?;

      let item = TodoItem::new(
         TodoId::from_identifier(self.id_generator.generate()),
         list_id.clone(),
         description,
         created_by,
         self.clock.now(),
      );

      todo_index.insert(item.id().clone(), (list_id, items.len()));
      items.push(item.clone());

      tracing::debug!(todo_id = %item.id(), todo_list_id = %item.list_id(), "Todo を追加しました");
      Ok(item)
   }

   async fn get_todo(&self, todo_id: &str) -> Result<TodoItem, DomainError> {
      let todo_id = TodoId::parse(todo_id)?;

      let state = self.state.read().await;
      state
         .todo_index
         .get(&todo_id)
         .and_then(|(list_id, position)| state.todo_lists.get(list_id)?.get(*position))
         .cloned()
         .ok_or(DomainError::NotFound(EntityKind::Todo))
   }

   async fn update_todo(&self, item: TodoItem) -> Result<(), DomainError> {
      let mut state = self.state.write().await;

      let position = state
         .todo_index
         .get(item.id())
         .filter(|(list_id, _)| list_id == item.list_id())
         .map(|(_, position)| *position)
         .ok_or(DomainError::NotFound(EntityKind::Todo))?;

      let slot = state
         .todo_lists
         .get_mut(item.list_id())
         .and_then(|items| items.get_mut(position))
         .ok_or(DomainError::NotFound(EntityKind::Todo))?;

      tracing::debug!(todo_id = %item.id(), status = %item.status(), "Todo を更新しました");
      *slot = item;
      Ok(())
   }
}
