/// 正規形式の識別子をラップする型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（[`Identifier`](crate::identifier::Identifier) をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)`
/// - `parse()`: 文字列を検証し、形式違反は `DomainError::InvalidFormat` を返す
/// - `from_identifier()` / `as_identifier()` / `as_str()`
/// - `FromStr` impl（`parse()` に委譲）
///
/// # 使用例
///
/// ```rust
/// use todoflow_domain::{DomainError, EntityKind, todo::TodoListId};
///
/// let id = TodoListId::parse("f2d869a8-e5bc-4fbf-ad71-333333333333").unwrap();
/// assert_eq!(id.as_str(), "f2d869a8-e5bc-4fbf-ad71-333333333333");
///
/// let error = TodoListId::parse("invalid-list-id").unwrap_err();
/// assert_eq!(error, DomainError::InvalidFormat(EntityKind::TodoList));
/// ```
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            kind: $kind:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name($crate::identifier::Identifier);

        impl $Name {
            /// 形式エラーで報告するエンティティ種別
            pub const KIND: $crate::EntityKind = $kind;

            /// 文字列を検証して識別子を作成する
            pub fn parse(value: &str) -> Result<Self, $crate::DomainError> {
                $crate::identifier::Identifier::parse(value)
                    .map(Self)
                    .ok_or($crate::DomainError::InvalidFormat(Self::KIND))
            }

            /// 生成済みの識別子から作成する
            pub fn from_identifier(identifier: $crate::identifier::Identifier) -> Self {
                Self(identifier)
            }

            /// 内部の識別子参照を取得する
            pub fn as_identifier(&self) -> &$crate::identifier::Identifier {
                &self.0
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

/// 正規表現で検証される String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: パターンに一致しない場合は `DomainError::Validation` を返す
/// - `as_str()` / `into_string()`
/// - `Display` impl
///
/// パターンは初回使用時に一度だけコンパイルされる。
///
/// # 引数
///
/// - `pattern`: 値全体に一致すべき正規表現（`^...$` で囲む）
/// - `error`: 検証失敗時にクライアントへ返すメッセージ
macro_rules! define_pattern_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            pattern: $pattern:expr,
            error: $error:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                static PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();

                let pattern = PATTERN.get_or_init(|| {
                    regex::Regex::new($pattern).unwrap_or_else(|error| {
                        panic!("{} の正規表現のコンパイルに失敗しました: {error}", stringify!($Name))
                    })
                });

                let value = value.into();
                if !pattern.is_match(&value) {
                    return Err($crate::DomainError::validation($error));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }
    };
}
