use crate::domain::{Status, StatusId};
use crate::ports::status_catalog::{Result, StatusCatalog as StatusCatalogTrait};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// PostgreSQLを使ったStatusCatalogの実装
pub struct StatusCatalog {
    pool: PgPool,
}

impl StatusCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusCatalogTrait for StatusCatalog {
    async fn find_by_id(&self, id: StatusId) -> Result<Option<Status>> {
        let row = sqlx::query("SELECT id, name FROM return_statuses WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Status {
            id: StatusId::new(row.get("id")),
            name: row.get("name"),
        }))
    }
}
