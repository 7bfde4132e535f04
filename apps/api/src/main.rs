//! # Todoflow API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_API_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `TODO_API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `CORS_ALLOW_ORIGIN` | No | 許可オリジン（デフォルト: `*`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run --bin todoflow-api
//! ```
//!
//! データはプロセス内にのみ保持され、終了とともに失われる。

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todoflow_api::{build_app, config::ApiConfig};
use todoflow_domain::clock::SystemClock;
use todoflow_infra::InMemoryTodoStore;
use todoflow_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ストアとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("todoflow-api");
   init_tracing(&tracing_config);

   let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      service = %tracing_config.service_name,
      "API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let store = Arc::new(InMemoryTodoStore::new());
   let app = build_app(store, Arc::new(SystemClock), &config.cors_allow_origin);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("バインドアドレスが不正です")?;
   let listener = TcpListener::bind(addr).await?;
   tracing::info!("{} でリッスン中", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
