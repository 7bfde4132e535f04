//! # Todo
//!
//! Todo リストと Todo アイテムに関するエンティティ・値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`TodoListId`] | Todo リスト ID | Todo アイテムを順序付きで保持するコンテナの識別子 |
//! | [`TodoId`] | Todo ID | Todo アイテムの識別子 |
//! | [`TodoDescription`] | 説明 | Todo の内容（英数字と空白、1〜256 文字） |
//! | [`TodoStatus`] | ステータス | `todo` / `ongoing` / `done` |
//! | [`TodoItem`] | Todo アイテム | 説明・ステータス・作成者・更新日時を持つ |
//!
//! ## ステータス遷移
//!
//! ```text
//!        ┌──────────────┐
//!        ▼              │
//!      todo ◀──▶ ongoing ◀──▶ done
//!        ▲                     │
//!        └─────────────────────┘
//! ```
//!
//! 3 つの状態は相互に到達可能で、終端状態はない（`done` から戻すこともできる）。
//! 同じステータスへの「遷移」も許可し、その場合も `updated_at` は更新される。

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::IntoStaticStr;

use crate::{DomainError, EntityKind, user::AccountNumber};

define_identifier! {
   /// Todo リスト ID
   pub struct TodoListId {
      kind: EntityKind::TodoList,
   }
}

define_identifier! {
   /// Todo ID
   pub struct TodoId {
      kind: EntityKind::Todo,
   }
}

define_pattern_string! {
   /// Todo の説明（値オブジェクト）
   pub struct TodoDescription {
      pattern: r"^[a-zA-Z0-9 ]{1,256}$",
      error: "invalid description",
   }
}

/// Todo のステータス
#[derive(
   Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TodoStatus {
   /// 未着手（作成直後）
   Todo,
   /// 着手中
   Ongoing,
   /// 完了
   Done,
}

impl FromStr for TodoStatus {
   type Err = DomainError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s {
         "todo" => Ok(Self::Todo),
         "ongoing" => Ok(Self::Ongoing),
         "done" => Ok(Self::Done),
         _ => Err(DomainError::validation("invalid status")),
      }
   }
}

/// Todo アイテム
///
/// # 不変条件
///
/// - 必ずちょうど 1 つの既存 Todo リストに属する（`list_id` は逆参照）
/// - 作成時のステータスは `Todo`
/// - 変更はステータス遷移のみで、遷移のたびに `updated_at` が更新される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
   id:          TodoId,
   list_id:     TodoListId,
   description: TodoDescription,
   status:      TodoStatus,
   created_by:  AccountNumber,
   updated_at:  DateTime<Utc>,
}

impl TodoItem {
   /// 新しい Todo アイテムを作成する
   ///
   /// - `now`: 現在日時（呼び出し元から注入）
   pub fn new(
      id: TodoId,
      list_id: TodoListId,
      description: TodoDescription,
      created_by: AccountNumber,
      now: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         list_id,
         description,
         status: TodoStatus::Todo,
         created_by,
         updated_at: now,
      }
   }

   pub fn id(&self) -> &TodoId {
      &self.id
   }

   pub fn list_id(&self) -> &TodoListId {
      &self.list_id
   }

   pub fn description(&self) -> &TodoDescription {
      &self.description
   }

   pub fn status(&self) -> TodoStatus {
      self.status
   }

   pub fn created_by(&self) -> &AccountNumber {
      &self.created_by
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }

   /// ステータスを変更した新しいインスタンスを返す
   ///
   /// 値が変わらない場合でも `updated_at` は `now` になる。
   pub fn with_status(self, status: TodoStatus, now: DateTime<Utc>) -> Self {
      Self {
         status,
         updated_at: now,
         ..self
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::{fixture, rstest};

   use super::*;

   #[fixture]
   fn now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_704_067_200, 0).unwrap()
   }

   #[fixture]
   fn item(now: DateTime<Utc>) -> TodoItem {
      TodoItem::new(
         TodoId::parse("f2d869a8-e5bc-4fbf-ad71-444444444444").unwrap(),
         TodoListId::parse("f2d869a8-e5bc-4fbf-ad71-333333333333").unwrap(),
         TodoDescription::new("buy milk").unwrap(),
         AccountNumber::parse("f2d869a8-e5bc-4fbf-ad71-000000000000").unwrap(),
         now,
      )
   }

   // TodoDescription

   #[rstest]
   #[case("a")]
   #[case("buy milk")]
   #[case("first todo")]
   #[case(&"x".repeat(256))]
   fn test_説明は英数字と空白の1から256文字を受け入れる(#[case] input: &str) {
      assert!(TodoDescription::new(input).is_ok());
   }

   #[rstest]
   #[case("", "空文字列")]
   #[case(&"x".repeat(257), "256 文字超過")]
   #[case("buy milk!", "記号を含む")]
   #[case("buy\nmilk", "改行を含む")]
   fn test_説明は不正な値を拒否する(#[case] input: &str, #[case] _reason: &str) {
      assert_eq!(
         TodoDescription::new(input).unwrap_err().to_string(),
         "invalid description"
      );
   }

   // TodoStatus

   #[rstest]
   #[case("todo", TodoStatus::Todo)]
   #[case("ongoing", TodoStatus::Ongoing)]
   #[case("done", TodoStatus::Done)]
   fn test_ステータスは既知の値をパースできる(#[case] input: &str, #[case] expected: TodoStatus) {
      assert_eq!(input.parse::<TodoStatus>().unwrap(), expected);
      assert_eq!(expected.to_string(), input);
   }

   #[rstest]
   #[case("")]
   #[case("Done")]
   #[case("finished")]
   fn test_ステータスは未知の値を拒否する(#[case] input: &str) {
      assert_eq!(
         input.parse::<TodoStatus>().unwrap_err(),
         DomainError::validation("invalid status")
      );
   }

   #[test]
   fn test_ステータスは小文字でシリアライズされる() {
      assert_eq!(
         serde_json::to_value(TodoStatus::Ongoing).unwrap(),
         serde_json::json!("ongoing")
      );
   }

   // TodoItem

   #[rstest]
   fn test_新規アイテムはtodo状態(item: TodoItem, now: DateTime<Utc>) {
      assert_eq!(item.status(), TodoStatus::Todo);
      assert_eq!(item.updated_at(), now);
   }

   #[rstest]
   fn test_ステータス変更後の状態(item: TodoItem) {
      let later = DateTime::from_timestamp(1_704_070_800, 0).unwrap();
      let original = item.clone();
      let sut = item.with_status(TodoStatus::Done, later);

      assert_eq!(sut.status(), TodoStatus::Done);
      assert_eq!(sut.updated_at(), later);
      assert_eq!(sut.id(), original.id());
      assert_eq!(sut.list_id(), original.list_id());
      assert_eq!(sut.description(), original.description());
      assert_eq!(sut.created_by(), original.created_by());
   }

   #[rstest]
   fn test_完了からtodoに戻せる(item: TodoItem, now: DateTime<Utc>) {
      let done = item.with_status(TodoStatus::Done, now);
      let reopened = done.with_status(TodoStatus::Todo, now);

      assert_eq!(reopened.status(), TodoStatus::Todo);
   }

   #[rstest]
   fn test_同じステータスでもupdated_atは更新される(item: TodoItem) {
      let later = DateTime::from_timestamp(1_704_070_800, 0).unwrap();
      let sut = item.with_status(TodoStatus::Todo, later);

      assert_eq!(sut.status(), TodoStatus::Todo);
      assert_eq!(sut.updated_at(), later);
   }
}
