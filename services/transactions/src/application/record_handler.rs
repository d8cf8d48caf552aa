/// 取引記録ハンドラー
///
/// HTTPトリガーで呼び出されるたびに取引レコードを1件発行し、
/// リポジトリへ1回だけ書き込んで、その結果をHTTPレスポンスに変換する。
use std::marker::PhantomData;

use chrono::Utc;
use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{error, info};

use crate::domain::TransactionRecord;
use crate::infrastructure::{RepositoryError, TransactionRepository};

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// 取引記録ハンドラーのエラー型
///
/// いずれの種別も呼び出し元には同じ500レスポンスとして返す。
#[derive(Debug, Error)]
pub enum RecordHandlerError {
    /// 属性エンコード、書き込み、タイムアウト
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// レスポンスJSONの生成に失敗
    #[error("Response encoding error: {0}")]
    ResponseEncoding(#[from] serde_json::Error),
}

/// 取引記録ハンドラー
///
/// リポジトリはプロセス起動時に一度だけ構築して注入する。
/// `R`はこのハンドラーが発行するレコードのスキーマ。
pub struct RecordTransactionHandler<TR, R>
where
    TR: TransactionRepository,
    R: TransactionRecord,
{
    /// 取引リポジトリ
    repository: TR,
    _record: PhantomData<fn() -> R>,
}

impl<TR, R> RecordTransactionHandler<TR, R>
where
    TR: TransactionRepository,
    R: TransactionRecord,
{
    /// 新しいRecordTransactionHandlerを作成
    pub fn new(repository: TR) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }

    /// 注入されたリポジトリへの参照を取得
    pub fn repository(&self) -> &TR {
        &self.repository
    }

    /// HTTPリクエストを処理
    ///
    /// リクエストボディは使用しない。
    /// 成功時は200と保存したレコードのJSON、失敗時は500とエラーメッセージを返す。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        info!(
            method = %request.method(),
            path = request.uri().path(),
            "取引記録リクエスト受信"
        );

        match self.record().await {
            Ok((record, body)) => {
                info!(
                    transaction_id = record.id(),
                    timestamp = record.timestamp(),
                    "取引レコードを保存"
                );
                build_response(StatusCode::OK, JSON_CONTENT_TYPE, body)
            }
            Err(err) => {
                error!(error = %err, "取引レコードの保存に失敗");
                build_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    TEXT_CONTENT_TYPE,
                    err.to_string(),
                )
            }
        }
    }

    /// レコードを発行して保存し、レスポンス用JSONを生成
    ///
    /// # 処理フロー
    /// 1. 現在時刻でレコードを発行（IDは新規採番）
    /// 2. リポジトリへ無条件に1回書き込む
    /// 3. 保存したレコードをJSONにシリアライズ
    pub async fn record(&self) -> Result<(R, String), RecordHandlerError> {
        let record = R::issue(Utc::now().timestamp());

        self.repository.put(&record).await?;

        let body = serde_json::to_string(&record)?;
        Ok((record, body))
    }
}

fn build_response(status: StatusCode, content_type: &'static str, body: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
