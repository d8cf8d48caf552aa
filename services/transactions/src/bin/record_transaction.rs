/// 拡張スキーマ版 取引記録Lambdaエントリポイント
///
/// API Gatewayからのリクエストごとに`Transaction`を1件発行し、
/// TABLE_NAMEで指定したDynamoDBテーブルに保存する。
use lambda_http::Error;
use transactions::domain::Transaction;
use transactions::run_recorder;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run_recorder::<Transaction>().await
}
