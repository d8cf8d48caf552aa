/// DynamoDBに取引レコードを保存するためのリポジトリ
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use thiserror::Error;
use tracing::debug;

use super::config::DynamoDbConfig;
use crate::domain::TransactionRecord;

/// テーブルのパーティションキー属性名
pub const PARTITION_KEY: &str = "id";

/// DynamoDBの属性マップ
pub type Item = HashMap<String, AttributeValue>;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// レコードをDynamoDB属性にエンコードできない
    #[error("Encoding error: {0}")]
    EncodingFailed(String),

    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// 書き込みが制限時間内に完了しなかった
    #[error("Write timed out after {0} ms")]
    Timeout(u128),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// DynamoDB属性をレコードにデコードできない
    #[error("Decoding error: {0}")]
    DecodingFailed(String),
}

/// 取引レコード永続化用トレイト
///
/// 実際のDynamoDB実装とテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// レコードを無条件に1回だけ書き込む
    ///
    /// 条件式やリトライは行わない。
    async fn put<R: TransactionRecord>(&self, record: &R) -> Result<(), RepositoryError>;

    /// 取引IDでレコードを取得
    ///
    /// 見つからなかった場合は`Ok(None)`
    async fn get<R: TransactionRecord>(&self, id: &str) -> Result<Option<R>, RepositoryError>;
}

/// レコードをDynamoDB属性マップにエンコード
pub fn encode_record<R: TransactionRecord>(record: &R) -> Result<Item, RepositoryError> {
    to_item(record).map_err(|e| RepositoryError::EncodingFailed(e.to_string()))
}

/// DynamoDB属性マップをレコードにデコード
pub fn decode_record<R: TransactionRecord>(item: Item) -> Result<R, RepositoryError> {
    from_item(item).map_err(|e| RepositoryError::DecodingFailed(e.to_string()))
}

/// TransactionRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoTransactionRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 取引テーブル名
    table_name: String,
    /// PutItemの待ち時間上限
    write_timeout: Duration,
}

impl DynamoTransactionRepository {
    /// 新しいDynamoTransactionRepositoryを作成
    pub fn new(client: DynamoDbClient, table_name: String, write_timeout: Duration) -> Self {
        Self {
            client,
            table_name,
            write_timeout,
        }
    }

    /// コールドスタート時に読み込んだ設定から作成
    pub fn from_config(config: &DynamoDbConfig) -> Self {
        Self::new(
            config.client().clone(),
            config.table_name().to_string(),
            config.write_timeout(),
        )
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TransactionRepository for DynamoTransactionRepository {
    async fn put<R: TransactionRecord>(&self, record: &R) -> Result<(), RepositoryError> {
        let item = encode_record(record)?;

        let request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send();

        // タイムアウト時は書き込みを破棄して失敗とする（SDK内部のリトライも含めて打ち切る）
        match tokio::time::timeout(self.write_timeout, request).await {
            Ok(Ok(_)) => {
                debug!(
                    table_name = %self.table_name,
                    transaction_id = record.id(),
                    "PutItem完了"
                );
                Ok(())
            }
            Ok(Err(e)) => Err(RepositoryError::WriteError(
                DisplayErrorContext(&e).to_string(),
            )),
            Err(_) => Err(RepositoryError::Timeout(self.write_timeout.as_millis())),
        }
    }

    async fn get<R: TransactionRecord>(&self, id: &str) -> Result<Option<R>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| RepositoryError::ReadError(DisplayErrorContext(&e).to_string()))?;

        result.item.map(decode_record).transpose()
    }
}
