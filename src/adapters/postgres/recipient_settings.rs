use crate::domain::ContractorId;
use crate::ports::recipient_settings::{RecipientSettings as RecipientSettingsTrait, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQLを使ったRecipientSettingsの実装
///
/// 送信元アドレスは`reseller_mail_settings`、従業員の権限は
/// `reseller_permitted_emails`に保存されている。
pub struct RecipientSettings {
    pool: PgPool,
}

impl RecipientSettings {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipientSettingsTrait for RecipientSettings {
    async fn sender_email(&self, reseller_id: ContractorId) -> Result<Option<String>> {
        let sender = sqlx::query_scalar::<_, String>(
            "SELECT sender_email FROM reseller_mail_settings WHERE reseller_id = $1",
        )
        .bind(reseller_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(sender)
    }

    async fn permitted_emails(
        &self,
        reseller_id: ContractorId,
        permit: &str,
    ) -> Result<Vec<String>> {
        let emails = sqlx::query_scalar::<_, String>(
            r#"
            SELECT email
            FROM reseller_permitted_emails
            WHERE reseller_id = $1 AND permit = $2
            ORDER BY email
            "#,
        )
        .bind(reseller_id.value())
        .bind(permit)
        .fetch_all(&self.pool)
        .await?;

        Ok(emails)
    }
}
