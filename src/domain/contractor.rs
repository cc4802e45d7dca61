use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::value_objects::ContractorId;

/// 取引先のロール
///
/// リセラー・顧客・従業員は同じエンティティ型で、このタグで区別する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractorRole {
    /// リセラーの顧客
    Customer,
    /// リセラー
    Seller,
    /// リセラーの従業員（クレーム作成者、鑑定担当）
    Employee,
}

impl ContractorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractorRole::Customer => "customer",
            ContractorRole::Seller => "seller",
            ContractorRole::Employee => "employee",
        }
    }
}

impl fmt::Display for ContractorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(ContractorRole::Customer),
            "seller" => Ok(ContractorRole::Seller),
            "employee" => Ok(ContractorRole::Employee),
            _ => Err(format!("Invalid contractor role: {}", s)),
        }
    }
}

/// 取引先
///
/// `reseller_id`・`email`・`mobile`は顧客ロールでのみ意味を持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: ContractorId,
    pub name: String,
    pub role: ContractorRole,
    pub reseller_id: Option<ContractorId>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

impl Contractor {
    pub fn new(id: ContractorId, name: impl Into<String>, role: ContractorRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            reseller_id: None,
            email: None,
            mobile: None,
        }
    }

    pub fn seller(id: i64, name: impl Into<String>) -> Self {
        Self::new(ContractorId::new(id), name, ContractorRole::Seller)
    }

    pub fn employee(id: i64, name: impl Into<String>) -> Self {
        Self::new(ContractorId::new(id), name, ContractorRole::Employee)
    }

    pub fn customer(id: i64, name: impl Into<String>, reseller_id: i64) -> Self {
        Self {
            reseller_id: Some(ContractorId::new(reseller_id)),
            ..Self::new(ContractorId::new(id), name, ContractorRole::Customer)
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    /// 名前の後ろにIDを付けた氏名（例: `"Jane Doe 7"`）
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.id)
    }

    /// 通知テンプレートで使う表示名
    ///
    /// 氏名が空の場合は名前そのものを使う。
    pub fn display_name(&self) -> String {
        let full_name = self.full_name();
        let full_name = full_name.trim();
        if full_name.is_empty() {
            self.name.clone()
        } else {
            full_name.to_string()
        }
    }

    /// `reseller_id`が所有する顧客かどうか
    pub fn is_customer_of(&self, reseller_id: ContractorId) -> bool {
        self.role == ContractorRole::Customer && self.reseller_id == Some(reseller_id)
    }

    /// 空でないメールアドレス
    pub fn contact_email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// 空でない携帯電話番号
    pub fn contact_mobile(&self) -> Option<&str> {
        non_blank(self.mobile.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_appends_id() {
        let client = Contractor::customer(7, "Jane Doe", 1);
        assert_eq!(client.full_name(), "Jane Doe 7");
        assert_eq!(client.display_name(), "Jane Doe 7");
    }

    #[test]
    fn test_display_name_without_name_keeps_id() {
        let client = Contractor::customer(7, "", 1);
        assert_eq!(client.display_name(), "7");
    }

    #[test]
    fn test_is_customer_of_checks_role_and_owner() {
        let reseller = ContractorId::new(1);
        assert!(Contractor::customer(7, "Jane", 1).is_customer_of(reseller));
        assert!(!Contractor::customer(7, "Jane", 2).is_customer_of(reseller));

        let mut not_customer = Contractor::employee(7, "Jane");
        not_customer.reseller_id = Some(reseller);
        assert!(!not_customer.is_customer_of(reseller));
    }

    #[test]
    fn test_contact_fields_ignore_blank_values() {
        let client = Contractor::customer(7, "Jane", 1)
            .with_email("")
            .with_mobile("+15550100");
        assert_eq!(client.contact_email(), None);
        assert_eq!(client.contact_mobile(), Some("+15550100"));
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [
            ContractorRole::Customer,
            ContractorRole::Seller,
            ContractorRole::Employee,
        ] {
            assert_eq!(role.as_str().parse::<ContractorRole>(), Ok(role));
        }
        assert!("admin".parse::<ContractorRole>().is_err());
    }
}
