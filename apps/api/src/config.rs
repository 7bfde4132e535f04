//! # アプリケーション設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `TODO_API_HOST` | No | `127.0.0.1` | バインドアドレス |
//! | `TODO_API_PORT` | No | `8080` | ポート番号 |
//! | `CORS_ALLOW_ORIGIN` | No | `*` | `Access-Control-Allow-Origin` に返すオリジン |
//!
//! ログ関連の `RUST_LOG` / `LOG_FORMAT` は `todoflow_shared::observability` が読む。

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("環境変数 {name} の値が不正です: {value:?}")]
   InvalidValue { name: &'static str, value: String },
}

/// CORS で許可するオリジン
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigin {
   /// すべてのオリジン（`*`）
   #[default]
   Any,
   /// 単一のオリジン
   Exact(HeaderValue),
}

impl CorsOrigin {
   fn parse(value: &str) -> Result<Self, ConfigError> {
      if value == "*" {
         return Ok(Self::Any);
      }
      HeaderValue::from_str(value)
         .map(Self::Exact)
         .map_err(|_| ConfigError::InvalidValue {
            name:  "CORS_ALLOW_ORIGIN",
            value: value.to_string(),
         })
   }
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:              String,
   /// ポート番号
   pub port:              u16,
   /// CORS 許可オリジン
   pub cors_allow_origin: CorsOrigin,
}

impl Default for ApiConfig {
   fn default() -> Self {
      Self {
         host:              DEFAULT_HOST.to_string(),
         port:              DEFAULT_PORT,
         cors_allow_origin: CorsOrigin::Any,
      }
   }
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 未設定の項目はデフォルト値を使う。値が解釈できない場合はエラーを返す。
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let host = lookup("TODO_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

      let port = match lookup("TODO_API_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: "TODO_API_PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN") {
         Some(value) => CorsOrigin::parse(&value)?,
         None => CorsOrigin::Any,
      };

      Ok(Self {
         host,
         port,
         cors_allow_origin,
      })
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
         .collect();
      ApiConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_未設定の場合はデフォルト値を使う() {
      assert_eq!(load(&[]).unwrap(), ApiConfig::default());
   }

   #[test]
   fn test_環境変数の値で上書きされる() {
      let config = load(&[
         ("TODO_API_HOST", "0.0.0.0"),
         ("TODO_API_PORT", "3000"),
         ("CORS_ALLOW_ORIGIN", "http://localhost:5173"),
      ])
      .unwrap();

      assert_eq!(config.host, "0.0.0.0");
      assert_eq!(config.port, 3000);
      assert_eq!(
         config.cors_allow_origin,
         CorsOrigin::Exact(HeaderValue::from_static("http://localhost:5173"))
      );
   }

   #[test]
   fn test_アスタリスクは全オリジン許可になる() {
      let config = load(&[("CORS_ALLOW_ORIGIN", "*")]).unwrap();

      assert_eq!(config.cors_allow_origin, CorsOrigin::Any);
   }

   #[rstest]
   #[case("")]
   #[case("http")]
   #[case("70000")]
   #[case("-1")]
   fn test_不正なポート番号はエラーになる(#[case] port: &str) {
      assert_eq!(
         load(&[("TODO_API_PORT", port)]).unwrap_err(),
         ConfigError::InvalidValue {
            name:  "TODO_API_PORT",
            value: port.to_string(),
         }
      );
   }

   #[test]
   fn test_ヘッダに使えないオリジンはエラーになる() {
      assert!(matches!(
         load(&[("CORS_ALLOW_ORIGIN", "http://bad\norigin")]),
         Err(ConfigError::InvalidValue {
            name: "CORS_ALLOW_ORIGIN",
            ..
         })
      ));
   }
}
