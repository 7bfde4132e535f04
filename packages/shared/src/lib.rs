//! # Todoflow 共有ユーティリティ
//!
//! API サーバーと各パッケージで共通に使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（HTTP レスポンスへの変換は API 側の責務）
//! - トレーシング初期化は `observability` feature でのみ有効

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
