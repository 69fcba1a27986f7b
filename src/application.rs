// アプリケーション層モジュール
pub mod request_handler;

// 再エクスポート
pub use request_handler::{handle_request, http_method_of, path_of, EMPTY_BODY, SUCCESS_STATUS_CODE};
