use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

use application::{handle_request, http_method_of, path_of};

/// Lambdaランタイムに登録するハンドラー
///
/// 任意のJSONペイロードを受け付け、受信ログを出力したうえで`handle_request`に委譲する。
/// 失敗経路はなく、常に`Ok`を返す。
pub async fn handler(event: LambdaEvent<Value>) -> Result<ApiGatewayProxyResponse, Error> {
    let (request, context) = event.into_parts();

    info!(
        request_id = %context.request_id,
        http_method = http_method_of(&request),
        path = path_of(&request),
        "APIリクエスト受信"
    );

    Ok(handle_request(&request))
}
