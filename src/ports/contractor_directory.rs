use crate::domain::{Contractor, ContractorId, ContractorRole};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 取引先ディレクトリポート
///
/// リセラー・顧客・従業員をIDで検索する。
/// 見つからない場合は`Ok(None)`であり、エラーではない。
#[async_trait]
pub trait ContractorDirectory: Send + Sync {
    /// 指定ロールで登録された取引先をIDで検索する
    ///
    /// ロールが一致しない取引先は見つからなかったものとして扱う。
    async fn find_by_id(&self, role: ContractorRole, id: ContractorId)
    -> Result<Option<Contractor>>;
}
