//! # ドメイン層エラー定義
//!
//! 識別子の形式違反、エンティティの不在、入力値の検証失敗を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **メッセージはそのまま公開**: `Display` の出力がクライアントに返る
//!   `{"error": "..."}` の文字列になる。文言を変える場合は API 互換性に注意
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidFormat` | 400 / 401 | 識別子が正規形式（8-4-4-4-12 の小文字 16 進）でない |
//! | `NotFound` | 400 / 401 | 正しい形式の識別子だが対応するエンティティが存在しない |
//! | `Validation` | 400 | リクエストボディやフィールド値の検証失敗 |
//!
//! アクセストークン由来のエラーは API 層で 401 に変換される。
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::{DomainError, EntityKind};
//!
//! let error = DomainError::InvalidFormat(EntityKind::TodoList);
//! assert_eq!(error.to_string(), "invalid todo list");
//!
//! let error = DomainError::NotFound(EntityKind::AccessToken);
//! assert_eq!(error.to_string(), "account not found");
//! ```

use thiserror::Error;

/// 識別子で参照されるエンティティの種類
///
/// `Display` は形式エラーのメッセージ（`invalid {kind}`）に使われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum EntityKind {
   /// ユーザーのアカウント番号
   #[strum(serialize = "account number")]
   Account,
   /// アクセストークン
   #[strum(serialize = "access token")]
   AccessToken,
   /// Todo リスト
   #[strum(serialize = "todo list")]
   TodoList,
   /// Todo アイテム
   #[strum(serialize = "todo")]
   Todo,
}

impl EntityKind {
   /// 存在しない場合のメッセージ
   ///
   /// アクセストークンが未登録の場合は「アカウントが見つからない」として扱う。
   pub fn not_found_message(&self) -> &'static str {
      match self {
         Self::Account | Self::AccessToken => "account not found",
         Self::TodoList => "todo list does not exist",
         Self::Todo => "todo does not exist",
      }
   }
}

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// 識別子が正規形式に一致しない
   #[error("invalid {0}")]
   InvalidFormat(EntityKind),

   /// 正しい形式の識別子だが、対応するエンティティが存在しない
   #[error("{}", .0.not_found_message())]
   NotFound(EntityKind),

   /// 入力値の検証失敗
   ///
   /// メッセージはクライアントにそのまま返る（例: `invalid description`）。
   #[error("{0}")]
   Validation(String),
}

impl DomainError {
   /// 検証エラーを作成する
   pub fn validation(message: impl Into<String>) -> Self {
      Self::Validation(message.into())
   }
}
