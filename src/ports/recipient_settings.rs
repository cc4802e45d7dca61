use crate::domain::ContractorId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// リセラーのメール設定ポート
///
/// リセラー通知の送信元アドレスと、受信する従業員を解決する。
#[async_trait]
pub trait RecipientSettings: Send + Sync {
    /// リセラーに設定された送信元アドレスを取得する
    async fn sender_email(&self, reseller_id: ContractorId) -> Result<Option<String>>;

    /// リセラーで`permit`を持つ従業員のアドレス一覧を取得する
    ///
    /// 従業員メールの宛先として1件ずつ順に送信される。
    async fn permitted_emails(&self, reseller_id: ContractorId, permit: &str)
    -> Result<Vec<String>>;
}
