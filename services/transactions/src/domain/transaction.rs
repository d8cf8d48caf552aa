/// 拡張スキーマの取引レコード
///
/// JSONレスポンスとDynamoDB属性で同じフィールド名を使用する:
/// `id`, `userId`, `origin`, `timeStamp`, `amount`, `transactionType`
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction_record::{new_transaction_id, TransactionRecord};

/// 発行時のデフォルトユーザーID
pub const DEFAULT_USER_ID: &str = "1";

/// 発行時のデフォルト金額
pub const DEFAULT_AMOUNT: i64 = 500;

/// 取引種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// 入金
    Credit,
    /// 出金
    Debit,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "CREDIT"),
            TransactionType::Debit => write!(f, "DEBIT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// 取引ID（UUID v4）
    pub id: String,
    /// 所有ユーザーのID
    pub user_id: String,
    /// 発生元タグ（未設定時は空文字列）
    pub origin: String,
    /// 作成時刻（Unix秒）
    #[serde(rename = "timeStamp")]
    pub timestamp: i64,
    /// 符号付き金額（数値としてエンコード）
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// 取引種別
    pub transaction_type: TransactionType,
}

impl TransactionRecord for Transaction {
    fn issue(issued_at: i64) -> Self {
        Self {
            id: new_transaction_id(),
            user_id: DEFAULT_USER_ID.to_string(),
            origin: String::new(),
            timestamp: issued_at,
            amount: Decimal::from(DEFAULT_AMOUNT),
            transaction_type: TransactionType::Credit,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
