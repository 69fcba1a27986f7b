/// ログ基盤モジュール
///
/// CloudWatch Logs向けにJSON形式で1行1イベントを出力する。
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG`未設定時のログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

static INIT: Once = Once::new();

/// `RUST_LOG`からフィルターを構築する。未設定・不正値の場合は`default_level`を使う
fn env_filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// JSONサブスクライバーをグローバルに設定する（2回目以降の呼び出しは何もしない）
pub fn init_logging() {
    INIT.call_once(|| {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        tracing_subscriber::registry()
            .with(env_filter_or(DEFAULT_LOG_LEVEL))
            .with(json_layer)
            .init();
    });
}

/// テスト用のcompact形式サブスクライバー（デフォルトは`debug`）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter_or("debug"))
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    /// 複数回呼び出してもパニックしない
    #[test]
    fn test_init_test_logging_idempotent() {
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    /// RUST_LOG未設定時はデフォルトレベルになる
    #[test]
    #[serial(log_env)]
    fn test_env_filter_defaults_without_rust_log() {
        unsafe { remove_env("RUST_LOG") };

        let filter = env_filter_or(DEFAULT_LOG_LEVEL);

        assert_eq!(filter.to_string(), "info");
    }

    /// RUST_LOGが設定されていればそちらを優先する
    #[test]
    #[serial(log_env)]
    fn test_env_filter_respects_rust_log() {
        unsafe { set_env("RUST_LOG", "warn") };

        let filter = env_filter_or(DEFAULT_LOG_LEVEL);

        assert_eq!(filter.to_string(), "warn");

        unsafe { remove_env("RUST_LOG") };
    }
}
