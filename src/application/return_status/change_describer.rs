use crate::domain::{ChangeSet, ContractorId, NotificationKind, Status, StatusId};
use crate::ports::{MessageFormatter, MessageParams, StatusCatalog};
use std::sync::Arc;

use super::errors::{Result, ReturnNotificationError};

/// 新規ポジション追加の説明テンプレートキー
pub const NEW_POSITION_ADDED: &str = "NewPositionAdded";
/// ステータス変更の説明テンプレートキー
pub const POSITION_STATUS_HAS_CHANGED: &str = "PositionStatusHasChanged";

/// ステータスを検索するヘルパー関数（見つからなければNotFound）
async fn find_status(catalog: &Arc<dyn StatusCatalog>, id: StatusId) -> Result<Status> {
    catalog
        .find_by_id(id)
        .await
        .map_err(ReturnNotificationError::StatusCatalog)?
        .ok_or_else(|| ReturnNotificationError::not_found("Status not found"))
}

/// DIFFERENCESフィールド用の変更説明を作る（純粋な関数）
///
/// - NEW: 新規ポジション追加の説明
/// - CHANGE（変更内容あり）: 遷移元・遷移先ステータスを解決し、ステータス変更の説明
/// - それ以外: 空文字列（後続のテンプレート検証で拒否される）
///
/// # 引数
/// * `catalog` - ステータスカタログ
/// * `formatter` - メッセージフォーマッター
/// * `kind` - 通知種別
/// * `change` - ステータス遷移
/// * `reseller_id` - ロケールを決めるリセラー
///
/// # エラー
/// - NotFound: ステータスが存在しない
/// - StatusCatalog / Formatter: ポートのI/Oエラー
pub async fn describe_change(
    catalog: &Arc<dyn StatusCatalog>,
    formatter: &Arc<dyn MessageFormatter>,
    kind: NotificationKind,
    change: Option<&ChangeSet>,
    reseller_id: ContractorId,
) -> Result<String> {
    match (kind, change) {
        (NotificationKind::New, _) => formatter
            .render(NEW_POSITION_ADDED, None, reseller_id)
            .await
            .map_err(ReturnNotificationError::Formatter),
        (NotificationKind::Change, Some(change)) => {
            let from = find_status(catalog, change.from_status_id()).await?;
            let to = find_status(catalog, change.to_status_id()).await?;

            let mut params = MessageParams::new();
            params.insert("FROM".to_string(), from.name);
            params.insert("TO".to_string(), to.name);
            formatter
                .render(POSITION_STATUS_HAS_CHANGED, Some(&params), reseller_id)
                .await
                .map_err(ReturnNotificationError::Formatter)
        }
        _ => Ok(String::new()),
    }
}
