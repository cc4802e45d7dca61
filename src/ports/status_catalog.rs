use crate::domain::{Status, StatusId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 返品ステータスカタログポート
#[async_trait]
pub trait StatusCatalog: Send + Sync {
    /// ステータスをIDで検索する
    async fn find_by_id(&self, id: StatusId) -> Result<Option<Status>>;
}
