use lambda_http::{service_fn, Error, Request};
use tracing::{error, info};

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

use application::RecordTransactionHandler;
use domain::TransactionRecord;
use infrastructure::{init_logging, DynamoDbConfig, DynamoTransactionRepository};

/// 取引記録Lambda関数を起動する
///
/// DynamoDB設定をコールドスタート時に一度だけ読み込み、ハンドラーに注入する。
/// 設定が不正な場合はランタイムループに入る前にエラーを返し、プロセスを終了させる。
pub async fn run_recorder<R: TransactionRecord>() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = DynamoDbConfig::from_env().await.inspect_err(|err| {
        error!(error = %err, "DynamoDB設定読み込み失敗");
    })?;

    info!(
        table_name = config.table_name(),
        write_timeout_ms = config.write_timeout().as_millis() as u64,
        record_type = std::any::type_name::<R>(),
        "取引記録Lambda関数を初期化"
    );

    let repository = DynamoTransactionRepository::from_config(&config);
    let handler = RecordTransactionHandler::<_, R>::new(repository);
    let handler = &handler;

    lambda_http::run(service_fn(move |request: Request| async move {
        Ok::<_, Error>(handler.handle(&request).await)
    }))
    .await
}
