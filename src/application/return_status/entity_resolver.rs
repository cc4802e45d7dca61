use crate::domain::{Contractor, ContractorId, ContractorRole, payload};
use crate::ports::ContractorDirectory;
use serde_json::Value;
use std::sync::Arc;

use super::errors::{Result, ReturnNotificationError};

/// ペイロードが参照する関係者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParties {
    pub client: Contractor,
    pub creator: Contractor,
    pub expert: Contractor,
}

/// ペイロードの`key`が指すIDで取引先を検索するヘルパー関数
async fn find(
    directory: &Arc<dyn ContractorDirectory>,
    role: ContractorRole,
    data: &Value,
    key: &str,
) -> Result<Option<Contractor>> {
    let id = ContractorId::new(payload::to_int(payload::field(data, key)));
    directory
        .find_by_id(role, id)
        .await
        .map_err(ReturnNotificationError::Directory)
}

/// 顧客・作成者・鑑定担当を解決する（純粋な関数）
///
/// ビジネスルール：
/// - 顧客は顧客ロールであり、かつ`reseller`が所有していること
/// - それ以外の顧客は存在しない顧客と同じく扱う
/// - 作成者と鑑定担当は従業員ロールで存在すること
///
/// # 引数
/// * `directory` - 取引先ディレクトリ
/// * `reseller` - 解決済みのリセラー
/// * `data` - 検証済みのペイロード
///
/// # エラー
/// - NotFound: "client not found" / "Creator not found" / "Expert not found"
/// - Directory: 取引先ディレクトリのI/Oエラー
pub async fn resolve_parties(
    directory: &Arc<dyn ContractorDirectory>,
    reseller: &Contractor,
    data: &Value,
) -> Result<ResolvedParties> {
    let client = find(directory, ContractorRole::Customer, data, "clientId")
        .await?
        .filter(|client| client.is_customer_of(reseller.id))
        .ok_or_else(|| ReturnNotificationError::not_found("client not found"))?;

    let creator = find(directory, ContractorRole::Employee, data, "creatorId")
        .await?
        .ok_or_else(|| ReturnNotificationError::not_found("Creator not found"))?;

    let expert = find(directory, ContractorRole::Employee, data, "expertId")
        .await?
        .ok_or_else(|| ReturnNotificationError::not_found("Expert not found"))?;

    Ok(ResolvedParties {
        client,
        creator,
        expert,
    })
}
