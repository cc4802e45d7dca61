use crate::domain::{Contractor, ContractorId, ContractorRole};
use crate::ports::contractor_directory::{ContractorDirectory as ContractorDirectoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// `contractors`テーブルの行をContractorに変換する
///
/// 未知のロール文字列は不正データとしてエラーにする。
fn map_row_to_contractor(row: &PgRow) -> Result<Contractor> {
    let role_str: &str = row.get("role");
    let role = ContractorRole::from_str(role_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    let reseller_id: Option<i64> = row.get("reseller_id");

    Ok(Contractor {
        id: ContractorId::new(row.get("id")),
        name: row.get("name"),
        role,
        reseller_id: reseller_id.map(ContractorId::new),
        email: row.get("email"),
        mobile: row.get("mobile"),
    })
}

/// PostgreSQLを使ったContractorDirectoryの実装
pub struct ContractorDirectory {
    pool: PgPool,
}

impl ContractorDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContractorDirectoryTrait for ContractorDirectory {
    async fn find_by_id(
        &self,
        role: ContractorRole,
        id: ContractorId,
    ) -> Result<Option<Contractor>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, role, reseller_id, email, mobile
            FROM contractors
            WHERE id = $1 AND role = $2
            "#,
        )
        .bind(id.value())
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_contractor).transpose()
    }
}
