use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::payload;
use super::value_objects::StatusId;

/// 通知種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// 返品に新しいポジションが追加された
    New,
    /// 既存ポジションのステータスが変わった
    Change,
    /// それ以外のコード（変更説明は生成されない）
    Other(i64),
}

impl NotificationKind {
    pub const NEW_CODE: i64 = 1;
    pub const CHANGE_CODE: i64 = 2;

    pub fn from_code(code: i64) -> Self {
        match code {
            Self::NEW_CODE => NotificationKind::New,
            Self::CHANGE_CODE => NotificationKind::Change,
            other => NotificationKind::Other(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            NotificationKind::New => Self::NEW_CODE,
            NotificationKind::Change => Self::CHANGE_CODE,
            NotificationKind::Other(code) => *code,
        }
    }
}

/// 送信メッセージに付与するイベントキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    #[serde(rename = "changeReturnStatus")]
    ChangeReturnStatus,
}

impl NotificationEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationEvent::ChangeReturnStatus => "changeReturnStatus",
        }
    }
}

/// 返品通知を受け取るリセラー従業員の権限
pub const GOODS_RETURN_PERMIT: &str = "tsGoodsReturn";

/// `differences`が運ぶステータス遷移
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet {
    pub from: Option<Value>,
    pub to: Option<Value>,
}

impl ChangeSet {
    /// `differences`を読み取る。空の値なら`None`
    pub fn from_payload(differences: Option<&Value>) -> Option<Self> {
        if payload::is_empty(differences) {
            return None;
        }
        let differences = differences?;
        Some(Self {
            from: payload::field(differences, "from").cloned(),
            to: payload::field(differences, "to").cloned(),
        })
    }

    pub fn from_status_id(&self) -> StatusId {
        StatusId::new(payload::to_int(self.from.as_ref()))
    }

    pub fn to_status_id(&self) -> StatusId {
        StatusId::new(payload::to_int(self.to.as_ref()))
    }

    /// 遷移先ステータスがあるか（ステータス0は無し扱い）
    pub fn has_target(&self) -> bool {
        !payload::is_empty(self.to.as_ref())
    }
}

/// テンプレートフィールドの値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Int(i64),
    Text(String),
}

impl TemplateValue {
    pub fn is_empty(&self) -> bool {
        match self {
            TemplateValue::Int(n) => *n == 0,
            TemplateValue::Text(s) => s.is_empty() || s == "0",
        }
    }

    pub fn render(&self) -> String {
        match self {
            TemplateValue::Int(n) => n.to_string(),
            TemplateValue::Text(s) => s.clone(),
        }
    }
}

fn text(value: &str) -> TemplateValue {
    TemplateValue::Text(value.to_string())
}

/// レンダラーとトランスポートに渡すテンプレートデータ
///
/// 13フィールドすべてが空でないことが送信前の不変条件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TemplateData {
    pub complaint_id: i64,
    pub complaint_number: String,
    pub creator_id: i64,
    pub creator_name: String,
    pub expert_id: i64,
    pub expert_name: String,
    pub client_id: i64,
    pub client_name: String,
    pub consumption_id: i64,
    pub consumption_number: String,
    pub agreement_number: String,
    pub date: String,
    pub differences: String,
}

impl TemplateData {
    /// 宣言順のフィールド（テンプレート名付き）
    pub fn fields(&self) -> [(&'static str, TemplateValue); 13] {
        use TemplateValue::Int;

        [
            ("COMPLAINT_ID", Int(self.complaint_id)),
            ("COMPLAINT_NUMBER", text(&self.complaint_number)),
            ("CREATOR_ID", Int(self.creator_id)),
            ("CREATOR_NAME", text(&self.creator_name)),
            ("EXPERT_ID", Int(self.expert_id)),
            ("EXPERT_NAME", text(&self.expert_name)),
            ("CLIENT_ID", Int(self.client_id)),
            ("CLIENT_NAME", text(&self.client_name)),
            ("CONSUMPTION_ID", Int(self.consumption_id)),
            ("CONSUMPTION_NUMBER", text(&self.consumption_number)),
            ("AGREEMENT_NUMBER", text(&self.agreement_number)),
            ("DATE", text(&self.date)),
            ("DIFFERENCES", text(&self.differences)),
        ]
    }

    /// 最初の空フィールド
    pub fn first_empty_field(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
    }

    /// レンダラー用パラメータへの変換
    pub fn to_params(&self) -> BTreeMap<String, String> {
        self.fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.render()))
            .collect()
    }
}

/// SMSチャネルの結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsChannelResult {
    #[serde(rename = "isSent")]
    pub is_sent: bool,
    pub message: String,
}

/// チャネルごとの通知結果
///
/// すべてのチャネルはfalse/空で始まり、ディスパッチャーは
/// 処理したチャネルだけを書き換える。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub notification_employee_by_email: bool,
    pub notification_client_by_email: bool,
    pub notification_client_by_sms: SmsChannelResult,
}

impl NotificationResult {
    /// 全チャネル未送信で、SMSメッセージだけを設定した結果
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            notification_client_by_sms: SmsChannelResult {
                is_sent: false,
                message: message.into(),
            },
            ..Self::default()
        }
    }
}
