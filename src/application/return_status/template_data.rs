use crate::domain::{TemplateData, payload};
use serde_json::Value;

use super::entity_resolver::ResolvedParties;
use super::errors::{Result, ReturnNotificationError};

/// ペイロード・解決済み関係者・変更説明からテンプレートデータを組み立てる
///
/// IDはペイロードの値を整数化して使い、名前は解決済みの取引先の
/// 表示名を使う。番号や日付は文字列化する。
///
/// # 引数
/// * `data` - 検証済みのペイロード
/// * `parties` - 解決済みの関係者
/// * `differences` - 変更説明
pub fn assemble_template_data(
    data: &Value,
    parties: &ResolvedParties,
    differences: String,
) -> TemplateData {
    let int = |key: &str| payload::to_int(payload::field(data, key));
    let text = |key: &str| payload::to_text(payload::field(data, key));

    TemplateData {
        complaint_id: int("complaintId"),
        complaint_number: text("complaintNumber"),
        creator_id: int("creatorId"),
        creator_name: parties.creator.display_name(),
        expert_id: int("expertId"),
        expert_name: parties.expert.display_name(),
        client_id: int("clientId"),
        client_name: parties.client.display_name(),
        consumption_id: int("consumptionId"),
        consumption_number: text("consumptionNumber"),
        agreement_number: text("agreementNumber"),
        date: text("date"),
        differences,
    }
}

/// テンプレートデータの完全性を検証する
///
/// # エラー
/// 宣言順で最初の空フィールドを名前付きのTemplateエラーとして返す
pub fn ensure_complete(template_data: &TemplateData) -> Result<()> {
    match template_data.first_empty_field() {
        Some(field) => Err(ReturnNotificationError::Template { field }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contractor;
    use serde_json::json;

    fn parties() -> ResolvedParties {
        ResolvedParties {
            client: Contractor::customer(7, "Jane", 1),
            creator: Contractor::employee(3, "Creator"),
            expert: Contractor::employee(4, "Expert"),
        }
    }

    fn payload() -> Value {
        json!({
            "complaintId": "10",
            "complaintNumber": "C-10",
            "creatorId": 3,
            "expertId": 4,
            "clientId": 7,
            "consumptionId": 20,
            "consumptionNumber": 2020,
            "agreementNumber": "AG-1",
            "date": "2024-05-01",
        })
    }

    #[test]
    fn test_assemble_coerces_fields() {
        let data = assemble_template_data(&payload(), &parties(), "changed".to_string());

        assert_eq!(data.complaint_id, 10);
        assert_eq!(data.consumption_number, "2020");
        assert_eq!(data.creator_name, "Creator 3");
        assert_eq!(data.client_name, "Jane 7");
        assert_eq!(data.differences, "changed");
        assert!(ensure_complete(&data).is_ok());
    }

    #[test]
    fn test_missing_field_fails_with_its_name() {
        let mut raw = payload();
        raw.as_object_mut().unwrap().remove("agreementNumber");

        let data = assemble_template_data(&raw, &parties(), "changed".to_string());
        let err = ensure_complete(&data).unwrap_err();

        assert!(matches!(
            err,
            ReturnNotificationError::Template {
                field: "AGREEMENT_NUMBER"
            }
        ));
        assert_eq!(err.code(), 500);
    }

    #[test]
    fn test_empty_description_fails_on_differences() {
        let data = assemble_template_data(&payload(), &parties(), String::new());
        let err = ensure_complete(&data).unwrap_err();
        assert_eq!(err.to_string(), "Template Data (DIFFERENCES) is empty!");
    }
}
