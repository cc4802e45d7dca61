use crate::domain::ContractorId;
use crate::ports::message_formatter::{
    MessageFormatter as MessageFormatterTrait, MessageParams, Result, interpolate,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// デフォルトテンプレートを保持するリセラーID
const DEFAULT_TEMPLATE_OWNER: i64 = 0;

/// PostgreSQLを使ったMessageFormatterの実装
///
/// リセラー独自のテンプレートをデフォルトより優先する。
/// テンプレートが存在しないキーはキー自体をそのまま返す。
pub struct MessageFormatter {
    pool: PgPool,
}

impl MessageFormatter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageFormatterTrait for MessageFormatter {
    async fn render(
        &self,
        key: &str,
        params: Option<&MessageParams>,
        reseller_id: ContractorId,
    ) -> Result<String> {
        let template = sqlx::query_scalar::<_, String>(
            r#"
            SELECT template
            FROM message_templates
            WHERE key = $1 AND reseller_id IN ($2, $3)
            ORDER BY reseller_id = $2 DESC
            LIMIT 1
            "#,
        )
        .bind(key)
        .bind(reseller_id.value())
        .bind(DEFAULT_TEMPLATE_OWNER)
        .fetch_optional(&self.pool)
        .await?;

        Ok(interpolate(template.as_deref().unwrap_or(key), params))
    }
}
