//! # エンティティストア
//!
//! ユーザー・アクセストークン・Todo リスト・Todo アイテムの保存先。
//! 状態を持つのはストアだけで、他のコンポーネントはすべてこのトレイトの
//! 操作を通してエンティティにアクセスする。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: ユースケースは `Arc<dyn TodoStore>` を受け取る
//! - **境界での形式検証**: クライアント由来の識別子は `&str` で受け取り、
//!   ストア内で正規形式を検証する（`InvalidFormat` → `NotFound` の順）
//! - **存在確認は `Option` / `Result`**: 空文字列などのゼロ値で不在を表さない
//! - **操作単位の原子性**: 各操作は単独で原子的。操作をまたぐトランザクションはない

pub mod in_memory;

use async_trait::async_trait;
use todoflow_domain::{
   DomainError,
   todo::{TodoDescription, TodoItem, TodoListId},
   user::{AccessToken, AccountNumber, User, UserName},
};

pub use in_memory::InMemoryTodoStore;

/// エンティティストアトレイト
#[async_trait]
pub trait TodoStore: Send + Sync {
   /// ユーザーを登録し、新しいアカウント番号を返す
   ///
   /// 名前の重複はチェックしない。
   async fn register_user(&self, name: UserName) -> AccountNumber;

   /// アカウント番号でユーザーを検索する
   async fn find_user(&self, account_number: &AccountNumber) -> Option<User>;

   /// 複数のアカウント番号でユーザーを一括検索する
   ///
   /// 存在しないアカウント番号は結果に含まれない。
   async fn find_users(&self, account_numbers: &[AccountNumber]) -> Vec<User>;

   /// 新しいアクセストークンを発行する
   ///
   /// 同じアカウントに発行済みのトークンは無効化しない。
   ///
   /// # エラー
   ///
   /// - `InvalidFormat(Account)`: アカウント番号が正規形式でない
   /// - `NotFound(Account)`: アカウントが存在しない
   async fn login(&self, account_number: &str) -> Result<AccessToken, DomainError>;

   /// アクセストークンに紐づくアカウント番号を返す
   ///
   /// # エラー
   ///
   /// - `InvalidFormat(AccessToken)`: トークンが正規形式でない
   /// - `NotFound(AccessToken)`: どのアカウントにも紐づいていない
   async fn authorize(&self, token: &str) -> Result<AccountNumber, DomainError>;

   /// 空の Todo リストを作成する
   async fn create_todo_list(&self) -> TodoListId;

   /// Todo リストのアイテムを追加順で返す
   ///
   /// 存在する空のリストは空の `Vec` を返し、エラーにはならない。
   ///
   /// # エラー
   ///
   /// - `InvalidFormat(TodoList)`: リスト ID が正規形式でない
   /// - `NotFound(TodoList)`: リストが存在しない
   async fn get_todos(&self, list_id: &str) -> Result<Vec<TodoItem>, DomainError>;

   /// Todo アイテムをリストの末尾に追加する
   ///
   /// ステータスは `todo`、`updated_at` は現在時刻になる。
   ///
   /// # エラー
   ///
   /// - `InvalidFormat(TodoList)` / `NotFound(TodoList)`
   async fn create_todo(
      &self,
      list_id: &str,
      description: TodoDescription,
      created_by: AccountNumber,
   ) -> Result<TodoItem, DomainError>;

   /// Todo ID でアイテムを検索する（全リスト横断）
   ///
   /// # エラー
   ///
   /// - `InvalidFormat(Todo)` / `NotFound(Todo)`
   async fn get_todo(&self, todo_id: &str) -> Result<TodoItem, DomainError>;

   /// 変更したアイテムを、所属リスト内の同じ位置に書き戻す
   ///
   /// # エラー
   ///
   /// - `NotFound(Todo)`: アイテムが存在しない
   async fn update_todo(&self, item: TodoItem) -> Result<(), DomainError>;
}
