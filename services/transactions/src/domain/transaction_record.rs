/// 取引レコードの共通インターフェース
///
/// 拡張スキーマ（`Transaction`）と最小スキーマ（`MinimalTransaction`）は
/// 互いに独立した構成であり、Lambdaバイナリごとにどちらか一方のみを使用する。
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// 1回の呼び出しで生成・保存される取引レコード
pub trait TransactionRecord:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// 新しいレコードを発行する
    ///
    /// 呼び出しごとに新しいUUID v4を`id`として採番し、
    /// `issued_at`（Unix秒）をタイムスタンプに設定する。
    /// それ以外のフィールドは固定のデフォルト値で埋める。
    fn issue(issued_at: i64) -> Self;

    /// 取引ID（テーブルのパーティションキー）
    fn id(&self) -> &str;

    /// 作成時刻（Unix秒）
    fn timestamp(&self) -> i64;
}

/// 新しい取引IDを採番する
pub(crate) fn new_transaction_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction_id_is_uuid_v4() {
        let id = new_transaction_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();

        assert_eq!(parsed.get_version_num(), 4);
        // ハイフン付き小文字の標準形式
        assert_eq!(id.len(), 36);
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn test_new_transaction_id_is_unique() {
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| new_transaction_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
