//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジック。
//! 各ユースケースはストアを `Arc<dyn TodoStore>` で保持し、
//! 入力値の検証とドメインエラーから `ApiError` への変換を担う。

pub mod session;
pub mod todo;
pub mod user;

pub use session::SessionService;
pub use todo::{CreateTodoInput, TodoItemDetail, TodoUseCaseImpl};
pub use user::UserUseCaseImpl;
