//! # Todoflow API サーバー
//!
//! ユーザー登録・ログインと、Todo リスト / Todo アイテムを扱う HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! handler ──▶ usecase ──▶ TodoStore (infra) ──▶ domain
//!   │            │
//!   │            └── SessionService（アクセストークンの認可）
//!   └── JsonBody（ボディ形式の検証）
//! ```
//!
//! 状態を持つのはストアだけで、ハンドラは `Arc` で共有した状態を
//! axum の `State` として受け取る。
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - JSON ボディ抽出器
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - 検証と業務ロジック
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use todoflow_api::{build_app, config::ApiConfig};
//! use todoflow_domain::clock::SystemClock;
//! use todoflow_infra::InMemoryTodoStore;
//!
//! let config = ApiConfig::from_env()?;
//! let app = build_app(
//!    Arc::new(InMemoryTodoStore::new()),
//!    Arc::new(SystemClock),
//!    &config.cors_allow_origin,
//! );
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{
   Router,
   http::{Method, header},
   routing::{get, post, put},
};
use config::CorsOrigin;
use handler::{
   TodoState,
   UserState,
   create_todo,
   create_todo_list,
   get_todo_list,
   health_check,
   login,
   register_user,
   update_todo,
};
use todoflow_domain::clock::Clock;
use todoflow_infra::TodoStore;
use tower::ServiceBuilder;
use tower_http::{
   cors::{AllowOrigin, CorsLayer},
   trace::TraceLayer,
};
use usecase::{SessionService, TodoUseCaseImpl, UserUseCaseImpl};

/// ルーターを構築する
///
/// ミドルウェアは含まない。
pub fn build_router(store: Arc<dyn TodoStore>, clock: Arc<dyn Clock>) -> Router {
   let user_state = Arc::new(UserState {
      usecase: UserUseCaseImpl::new(store.clone()),
   });
   let todo_state = Arc::new(TodoState {
      session: SessionService::new(store.clone()),
      usecase: TodoUseCaseImpl::new(store, clock),
   });

   Router::new()
      .route("/health", get(health_check))
      .route("/users/register", post(register_user))
      .route("/users/login", post(login))
      .with_state(user_state)
      .route("/todolists", post(create_todo_list))
      .route("/todolists/{list_id}", get(get_todo_list))
      .route("/todos", post(create_todo))
      .route("/todos/{todo_id}", put(update_todo))
      .with_state(todo_state)
}

/// ルーターにトレーシングと CORS のミドルウェアを重ねたアプリケーションを構築する
pub fn build_app(
   store: Arc<dyn TodoStore>,
   clock: Arc<dyn Clock>,
   cors_allow_origin: &CorsOrigin,
) -> Router {
   build_router(store, clock).layer(
      ServiceBuilder::new()
         .layer(TraceLayer::new_for_http())
         .layer(cors_layer(cors_allow_origin)),
   )
}

fn cors_layer(allow_origin: &CorsOrigin) -> CorsLayer {
   let allow_origin = match allow_origin {
      CorsOrigin::Any => AllowOrigin::any(),
      CorsOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
   };

   CorsLayer::new()
      .allow_origin(allow_origin)
      .allow_methods([Method::GET, Method::POST, Method::PUT])
      .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
