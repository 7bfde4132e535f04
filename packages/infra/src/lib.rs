//! # Todoflow インフラ層
//!
//! エンティティの保存先を提供する。
//!
//! ## モジュール構成
//!
//! - [`store`] - ストアトレイトとインメモリ実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use todoflow_infra::{InMemoryTodoStore, TodoStore};
//!
//! let store: Arc<dyn TodoStore> = Arc::new(InMemoryTodoStore::new());
//! ```

pub mod store;

pub use store::{InMemoryTodoStore, TodoStore};
