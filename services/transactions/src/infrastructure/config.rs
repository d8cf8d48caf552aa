/// DynamoDB接続設定
///
/// コールドスタート時に一度だけ読み込み、ハンドラーに注入する。
use std::time::Duration;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// テーブル名の環境変数
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// 書き込みタイムアウト（ミリ秒）の環境変数
pub const WRITE_TIMEOUT_MILLIS_ENV: &str = "WRITE_TIMEOUT_MILLIS";

/// 書き込みタイムアウトのデフォルト値
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// DynamoDB設定のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment variable {name}: {value:?}")]
    InvalidEnvVar { name: String, value: String },
}

/// テーブル名とクライアントを持つDynamoDB設定
///
/// 環境変数:
/// - TABLE_NAME: 取引レコード保存用テーブル（必須）
/// - WRITE_TIMEOUT_MILLIS: PutItemの待ち時間上限（省略時5000）
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 取引テーブル名
    table_name: String,
    /// 書き込みタイムアウト
    write_timeout: Duration,
}

impl DynamoDbConfig {
    /// 環境変数を読み込み、AWS設定からクライアントを作成する
    ///
    /// テーブル名が未設定の場合はAWS設定を読み込む前にエラーを返す。
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        let table_name = table_name_from_env()?;
        let write_timeout = write_timeout_from_env()?;

        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self {
            client,
            table_name,
            write_timeout,
        })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, table_name: String, write_timeout: Duration) -> Self {
        Self {
            client,
            table_name,
            write_timeout,
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 取引テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// 書き込みタイムアウトを取得
    pub fn write_timeout(&self) -> Duration {
        self.write_timeout
    }
}

/// TABLE_NAMEを読み込む（空文字列は未設定扱い）
fn table_name_from_env() -> Result<String, DynamoDbConfigError> {
    match std::env::var(TABLE_NAME_ENV) {
        Ok(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(DynamoDbConfigError::MissingEnvVar(TABLE_NAME_ENV.to_string())),
    }
}

/// WRITE_TIMEOUT_MILLISを読み込む
fn write_timeout_from_env() -> Result<Duration, DynamoDbConfigError> {
    let Ok(value) = std::env::var(WRITE_TIMEOUT_MILLIS_ENV) else {
        return Ok(DEFAULT_WRITE_TIMEOUT);
    };

    match value.trim().parse::<u64>() {
        Ok(millis) if millis > 0 => Ok(Duration::from_millis(millis)),
        _ => Err(DynamoDbConfigError::InvalidEnvVar {
            name: WRITE_TIMEOUT_MILLIS_ENV.to_string(),
            value,
        }),
    }
}
