/// 最小スキーマ版 取引記録Lambdaエントリポイント
///
/// `MinimalTransaction`（id, timeStamp）のみを保存する。
/// 拡張スキーマ版とはテーブルを共有しない。
use lambda_http::Error;
use transactions::domain::MinimalTransaction;
use transactions::run_recorder;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run_recorder::<MinimalTransaction>().await
}
