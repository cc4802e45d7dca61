use serde::{Deserialize, Serialize};

use super::value_objects::StatusId;

/// 返品ステータス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
}

impl Status {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: StatusId::new(id),
            name: name.into(),
        }
    }
}

/// 基準ステータス一覧（完了・保留・却下）
pub fn reference_statuses() -> Vec<Status> {
    vec![
        Status::new(0, "Completed"),
        Status::new(1, "Pending"),
        Status::new(2, "Rejected"),
    ]
}
