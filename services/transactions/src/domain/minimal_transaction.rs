/// 最小スキーマの取引レコード
///
/// IDと作成時刻のみを持つ。
use serde::{Deserialize, Serialize};

use super::transaction_record::{new_transaction_id, TransactionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalTransaction {
    pub id: String,
    #[serde(rename = "timeStamp")]
    pub timestamp: i64,
}

impl TransactionRecord for MinimalTransaction {
    fn issue(issued_at: i64) -> Self {
        Self {
            id: new_transaction_id(),
            timestamp: issued_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
