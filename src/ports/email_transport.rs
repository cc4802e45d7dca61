use crate::domain::{ContractorId, NotificationEvent, StatusId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 送信メール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub reseller_id: ContractorId,
    pub event: NotificationEvent,
    /// 顧客宛てメールのみ設定される
    pub client_id: Option<ContractorId>,
    /// 顧客宛てステータス変更の遷移先
    pub status_to: Option<StatusId>,
}

/// メール送信ポート
///
/// 1回の呼び出しが1通の送信に対応する。
/// 送信失敗は回復せずに呼び出し元へ返す（リトライしない）。
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}
