/// API Gateway プロキシ Lambda エントリポイント
///
/// ハンドラーをLambdaランタイムの呼び出しループに登録する。
/// イベントごとの呼び出し・並行実行・タイムアウトはランタイム側が管理する。
use api_func::handler;
use api_func::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("API Lambda関数を初期化");

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
