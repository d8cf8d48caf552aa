// アプリケーション層モジュール
pub mod record_handler;

// 再エクスポート
pub use record_handler::{RecordHandlerError, RecordTransactionHandler};
