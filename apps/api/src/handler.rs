//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、検証と業務ロジックはユースケースに委譲する
//! - 検証順序は全エンドポイント共通: ボディ形式 → 認可 → フィールド値 → 存在確認
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs
//! └── handler/
//!     ├── health.rs      # GET  /health
//!     ├── user.rs        # POST /users/register, /users/login
//!     ├── todo_list.rs   # POST /todolists, GET /todolists/{list_id}
//!     └── todo.rs        # POST /todos, PUT /todos/{todo_id}
//! ```

pub mod health;
pub mod todo;
pub mod todo_list;
pub mod user;

pub use health::health_check;
pub use todo::{TodoItemDto, TodoState, create_todo, update_todo};
pub use todo_list::{create_todo_list, get_todo_list};
pub use user::{UserState, login, register_user};
