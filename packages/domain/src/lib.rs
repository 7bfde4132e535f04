//! # Todoflow ドメイン層
//!
//! ユーザー・アクセストークン・Todo リスト・Todo アイテムのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 識別子や入力値は生成時に検証し、不正な値の存在を型で排除する
//! - **エンティティ**: `User`, `TodoItem`。変更は新しいインスタンスを返すメソッド経由
//! - **ドメインエラー**: 形式違反・不在・検証失敗を区別する
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//!   ↘
//!     shared
//! ```
//!
//! ドメイン層はストアや HTTP に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`identifier`] - 正規形式の識別子と生成器
//! - [`user`] - ユーザー、アカウント番号、アクセストークン
//! - [`todo`] - Todo リスト ID、Todo アイテム、ステータス
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメインエラー

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod identifier;
pub mod todo;
pub mod user;

pub use error::{DomainError, EntityKind};
