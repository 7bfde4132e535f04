//! # 識別子
//!
//! アカウント番号・アクセストークン・Todo リスト ID・Todo ID に共通する
//! 正規形式の識別子と、その生成器を定義する。
//!
//! ## 正規形式
//!
//! 8-4-4-4-12 桁にハイフンで区切った小文字 16 進文字列（UUID と同じ形）。
//!
//! ```text
//! f2d869a8-e5bc-4fbf-ad71-222222222222
//! ```
//!
//! 大文字、波括弧、ハイフンなしの表記は受け付けない。`Uuid::parse_str` は
//! これらも受理するため、検証には正規表現を使う。
//!
//! ## 設計判断
//!
//! 形式の検証はこのモジュールの [`Identifier::parse`] に一本化する。
//! エンティティごとの型（`AccountNumber`, `TodoListId` など）は
//! `define_identifier!` マクロで生成し、すべてここに委譲する。
//!
//! 一意性は UUID v4 の 122 ビットの乱数に依存する。衝突は実用上起こらない
//! ものとして扱い、発行時の重複チェックは行わない。

use std::{
   fmt,
   sync::{
      OnceLock,
      atomic::{AtomicU64, Ordering},
   },
};

use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

/// 正規形式のパターン
const IDENTIFIER_PATTERN: &str = r"^[a-f0-9]{8}-([a-f0-9]{4}-){3}[a-f0-9]{12}$";

static IDENTIFIER_RE: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
   IDENTIFIER_RE.get_or_init(|| {
      Regex::new(IDENTIFIER_PATTERN)
         .unwrap_or_else(|error| panic!("識別子の正規表現のコンパイルに失敗しました: {error}"))
   })
}

/// 正規形式であることが保証された識別子
///
/// 生成は [`Identifier::generate`]（新規発行）か [`Identifier::parse`]
/// （外部入力の検証）のどちらかに限られる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
   /// 新しい識別子をランダムに生成する
   pub fn generate() -> Self {
      // Uuid の Display はハイフン区切りの小文字表記
      Self(Uuid::new_v4().to_string())
   }

   /// 文字列が正規形式か判定する
   pub fn is_canonical(value: &str) -> bool {
      identifier_regex().is_match(value)
   }

   /// 文字列を検証して識別子を作成する
   ///
   /// 正規形式でない場合は `None` を返す。どのエンティティの識別子として
   /// 扱うかは呼び出し側の型が決める。
   pub fn parse(value: &str) -> Option<Self> {
      Self::is_canonical(value).then(|| Self(value.to_string()))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for Identifier {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// 識別子の生成器
///
/// ストアに注入し、テストでは決定的な値を発行できるようにする。
pub trait IdGenerator: Send + Sync {
   fn generate(&self) -> Identifier;
}

/// ランダムな識別子を発行する実装
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
   fn generate(&self) -> Identifier {
      Identifier::generate()
   }
}

/// 連番の識別子を発行するテスト用実装
///
/// `00000000-0000-0000-0000-000000000001` から順に発行する。
#[derive(Default)]
pub struct SequentialIdGenerator {
   issued: AtomicU64,
}

impl SequentialIdGenerator {
   pub fn new() -> Self {
      Self::default()
   }
}

impl IdGenerator for SequentialIdGenerator {
   fn generate(&self) -> Identifier {
      let next = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
      Identifier(format!("00000000-0000-0000-0000-{next:012x}"))
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[test]
   fn test_生成した識別子は正規形式() {
      for _ in 0..100 {
         let id = Identifier::generate();
         assert!(Identifier::is_canonical(id.as_str()), "{id}");
      }
   }

   #[test]
   fn test_生成した識別子は重複しない() {
      let first = Identifier::generate();
      let second = Identifier::generate();

      assert_ne!(first, second);
   }

   #[rstest]
   #[case("f2d869a8-e5bc-4fbf-ad71-222222222222")]
   #[case("00000000-0000-0000-0000-000000000000")]
   #[case("abcdef01-2345-6789-abcd-ef0123456789")]
   fn test_正規形式の文字列を受け入れる(#[case] input: &str) {
      let id = Identifier::parse(input).unwrap();
      assert_eq!(id.as_str(), input);
   }

   #[rstest]
   #[case("", "空文字列")]
   #[case("invalid-list-id", "形式が異なる")]
   #[case("F2D869A8-E5BC-4FBF-AD71-222222222222", "大文字")]
   #[case("f2d869a8e5bc4fbfad71222222222222", "ハイフンなし")]
   #[case("{f2d869a8-e5bc-4fbf-ad71-222222222222}", "波括弧付き")]
   #[case("f2d869a8-e5bc-4fbf-ad71-0000000000000", "末尾が 13 桁")]
   #[case("f2d869a8-e5bc-4fbf-ad71-22222222222", "末尾が 11 桁")]
   #[case("g2d869a8-e5bc-4fbf-ad71-222222222222", "16 進以外の文字")]
   #[case(" f2d869a8-e5bc-4fbf-ad71-222222222222", "先頭に空白")]
   #[case("f2d869a8-e5bc-4fbf-ad71-222222222222\n", "末尾に改行")]
   fn test_正規形式でない文字列を拒否する(#[case] input: &str, #[case] _reason: &str) {
      assert_eq!(Identifier::parse(input), None);
   }

   #[test]
   fn test_連番生成器は1から順に発行する() {
      let generator = SequentialIdGenerator::new();

      assert_eq!(
         generator.generate().as_str(),
         "00000000-0000-0000-0000-000000000001"
      );
      assert_eq!(
         generator.generate().as_str(),
         "00000000-0000-0000-0000-000000000002"
      );
   }

   #[test]
   fn test_連番生成器の識別子は正規形式() {
      let generator = SequentialIdGenerator::new();
      for _ in 0..20 {
         assert!(Identifier::is_canonical(generator.generate().as_str()));
      }
   }

   #[test]
   fn test_シリアライズは文字列そのもの() {
      let id = Identifier::parse("f2d869a8-e5bc-4fbf-ad71-222222222222").unwrap();
      let json = serde_json::to_value(&id).unwrap();

      assert_eq!(json, serde_json::json!("f2d869a8-e5bc-4fbf-ad71-222222222222"));
   }
}
