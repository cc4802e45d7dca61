use crate::domain::ContractorId;
use async_trait::async_trait;
use std::collections::BTreeMap;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// メッセージテンプレートに埋め込む名前付きパラメータ
pub type MessageParams = BTreeMap<String, String>;

/// ローカライズ済みメッセージのレンダリングポート
///
/// メールの件名・本文と、変更説明の両方に使われる。
#[async_trait]
pub trait MessageFormatter: Send + Sync {
    /// `key`のテンプレートをリセラーのロケールでレンダリングする
    ///
    /// # 引数
    /// * `key` - テンプレートキー
    /// * `params` - 埋め込むパラメータ（無い場合はテンプレートをそのまま返す）
    /// * `reseller_id` - ロケールを決めるリセラー
    async fn render(
        &self,
        key: &str,
        params: Option<&MessageParams>,
        reseller_id: ContractorId,
    ) -> Result<String>;
}

/// `{NAME}`形式のプレースホルダーをパラメータ値で置換する
///
/// 対応するパラメータが無いプレースホルダーはそのまま残す。
pub fn interpolate(template: &str, params: Option<&MessageParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
