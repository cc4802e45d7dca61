use crate::domain::{
    Contractor, ContractorId, ContractorRole, NotificationKind, NotificationResult, RequestParams,
    payload,
};
use crate::ports::ContractorDirectory;
use serde_json::Value;
use std::sync::Arc;

use super::errors::{Result, ReturnNotificationError};

/// 検証済みのペイロードと解決済みのリセラー
#[derive(Debug, Clone)]
pub struct ValidatedRequest<'a> {
    pub data: &'a Value,
    pub reseller: Contractor,
    pub kind: NotificationKind,
}

/// 検証前のリセラー事前チェック（ソフト）
///
/// ペイロードがあり、その`resellerId`が空の場合は、エラーではなく
/// 通知結果を返して操作を打ち切る。
/// [`validate_request`]のハードチェックとは別の振る舞いとして残す。
///
/// # 引数
/// * `params` - リクエストパラメータ
///
/// # 戻り値
/// 打ち切る場合はSMSメッセージに`"Empty resellerId"`を設定した結果、
/// 続行する場合は`None`
pub fn precheck_reseller(params: &RequestParams) -> Option<NotificationResult> {
    let data = params.data()?;
    if payload::is_empty(payload::field(data, "resellerId")) {
        return Some(NotificationResult::rejected("Empty resellerId"));
    }
    None
}

/// ペイロードを検証し、リセラーを解決する（純粋な関数）
///
/// 検証順序：
/// 1. `data`の存在
/// 2. `resellerId`の存在
/// 3. リセラー（sellerロール）の存在
/// 4. `notificationType`の存在と整数への変換
///
/// # 引数
/// * `directory` - 取引先ディレクトリ
/// * `params` - リクエストパラメータ
///
/// # 戻り値
/// 検証済みリクエスト（ペイロードは`params`からの借用）
///
/// # エラー
/// - Validation: `data`・`resellerId`・`notificationType`が無い
/// - NotFound: 指定IDのリセラーが存在しない
/// - Directory: 取引先ディレクトリのI/Oエラー
pub async fn validate_request<'a>(
    directory: &Arc<dyn ContractorDirectory>,
    params: &'a RequestParams,
) -> Result<ValidatedRequest<'a>> {
    let data = params
        .data()
        .ok_or_else(|| ReturnNotificationError::validation("Empty data"))?;

    let reseller_id = payload::field(data, "resellerId")
        .ok_or_else(|| ReturnNotificationError::validation("Empty resellerId"))?;
    let reseller_id = ContractorId::new(payload::to_int(Some(reseller_id)));

    let reseller = directory
        .find_by_id(ContractorRole::Seller, reseller_id)
        .await
        .map_err(ReturnNotificationError::Directory)?
        .ok_or_else(|| ReturnNotificationError::not_found("Seller not found"))?;

    let kind = payload::field(data, "notificationType")
        .ok_or_else(|| ReturnNotificationError::validation("Empty notificationType"))?;
    let kind = NotificationKind::from_code(payload::to_int(Some(kind)));

    tracing::debug!(reseller_id = %reseller.id, kind = kind.code(), "Request validated");

    Ok(ValidatedRequest {
        data,
        reseller,
        kind,
    })
}
