//! # ユーザー
//!
//! ユーザーエンティティと、認証に使う識別子を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`AccountNumber`] | アカウント番号 | 登録時に発行されるユーザーの識別子 |
//! | [`AccessToken`] | アクセストークン | ログイン時に発行され、リクエストの認可に使う不透明な識別子 |
//! | [`UserName`] | ユーザー名 | 表示名。重複してもよい |
//! | [`User`] | ユーザー | アカウント番号と表示名の組 |
//!
//! アクセストークンは資格情報から導出した秘密ではなく、ランダムな識別子にすぎない。

use crate::EntityKind;

define_identifier! {
   /// アカウント番号
   pub struct AccountNumber {
      kind: EntityKind::Account,
   }
}

define_identifier! {
   /// アクセストークン
   ///
   /// 1 つのアカウントに複数のトークンが同時に有効でありうる。
   pub struct AccessToken {
      kind: EntityKind::AccessToken,
   }
}

define_pattern_string! {
   /// ユーザー名（値オブジェクト）
   ///
   /// 英数字と空白のみ、5〜32 文字。
   pub struct UserName {
      pattern: r"^[a-zA-Z0-9 ]{5,32}$",
      error: "invalid user name",
   }
}

/// ユーザーエンティティ
///
/// 登録後は変更されず、削除もされない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
   account_number: AccountNumber,
   name:           UserName,
}

impl User {
   pub fn new(account_number: AccountNumber, name: UserName) -> Self {
      Self {
         account_number,
         name,
      }
   }

   pub fn account_number(&self) -> &AccountNumber {
      &self.account_number
   }

   pub fn name(&self) -> &UserName {
      &self.name
   }
}
