// API Gateway プロキシリクエストハンドラー
//
// 受信したリクエストの内容に関わらず、固定のHTTP 200・空ボディの
// レスポンスを返す。業務ロジックはこの関数に追加していく。
//
// ペイロードは任意のJSON値。httpMethodやrequestContextの有無・型は問わない。

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use serde_json::Value;

/// 常に返却するHTTPステータスコード
pub const SUCCESS_STATUS_CODE: i64 = 200;

/// 常に返却するレスポンスボディ
pub const EMPTY_BODY: &str = "";

/// API Gateway プロキシリクエストを処理してレスポンスを生成
///
/// リクエストのフィールドは一切参照しない。ヘッダーは付与せず、
/// ボディは`null`ではなく空文字列としてシリアライズされる。
///
/// # Arguments
/// * `_request` - 任意のJSONペイロード（現在は使用しない）
///
/// # Returns
/// ステータス200・空ボディのレスポンス
pub fn handle_request(_request: &Value) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: SUCCESS_STATUS_CODE,
        body: Some(Body::Text(EMPTY_BODY.to_string())),
        ..Default::default()
    }
}

/// ログ出力用にhttpMethodを取り出す（文字列以外・欠落時は空文字列）
pub fn http_method_of(request: &Value) -> &str {
    string_field(request, "httpMethod")
}

/// ログ出力用にpathを取り出す（文字列以外・欠落時は空文字列）
pub fn path_of(request: &Value) -> &str {
    string_field(request, "path")
}

fn string_field<'a>(request: &'a Value, key: &str) -> &'a str {
    request.get(key).and_then(Value::as_str).unwrap_or_default()
}
