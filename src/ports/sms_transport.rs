use crate::domain::{ContractorId, NotificationEvent, StatusId, TemplateData};
use async_trait::async_trait;

/// 送信SMS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRequest {
    pub reseller_id: ContractorId,
    pub client_id: ContractorId,
    pub event: NotificationEvent,
    pub status_to: StatusId,
    pub template_data: TemplateData,
}

/// SMS送信結果
///
/// `error`はプロバイダーからの説明で、`sent`がtrueでも設定されることがある。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsOutcome {
    pub sent: bool,
    pub error: Option<String>,
}

impl SmsOutcome {
    pub fn sent() -> Self {
        Self {
            sent: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            sent: false,
            error: Some(error.into()),
        }
    }
}

/// SMS送信ポート
///
/// 送信失敗はエラーではなく結果として報告される。
/// 呼び出し元は失敗を通知結果に記録し、処理を中断しない。
#[async_trait]
pub trait SmsTransport: Send + Sync {
    async fn send(&self, request: &SmsRequest) -> SmsOutcome;
}
