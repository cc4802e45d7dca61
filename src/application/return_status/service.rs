use crate::domain::{ChangeSet, NotificationResult, RequestParams, payload};
use crate::ports::*;
use std::sync::Arc;

use super::change_describer::describe_change;
use super::dispatcher::{DispatchContext, dispatch};
use super::entity_resolver::resolve_parties;
use super::errors::Result;
use super::request_validator::{precheck_reseller, validate_request};
use super::template_data::{assemble_template_data, ensure_complete};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// このパターンにより：
/// - すべての外部コラボレーター（ディレクトリ、カタログ、設定、送信）が明示的
/// - テストではモックアダプターに差し替えるだけで済む
/// - 呼び出し間で共有する可変状態を持たない
#[derive(Clone)]
pub struct ServiceDependencies {
    pub contractor_directory: Arc<dyn ContractorDirectory>,
    pub status_catalog: Arc<dyn StatusCatalog>,
    pub recipient_settings: Arc<dyn RecipientSettings>,
    pub message_formatter: Arc<dyn MessageFormatter>,
    pub email_transport: Arc<dyn EmailTransport>,
    pub sms_transport: Arc<dyn SmsTransport>,
}

/// 返品ステータスの変更をリセラー従業員と顧客に通知する（純粋な関数）
///
/// すべての依存が引数として明示的に渡される（関数型の原則）。
///
/// 処理フロー：
/// 1. リセラーの事前チェック（エラーではなく結果を返す）
/// 2. ペイロードを検証し、リセラーを解決
/// 3. 顧客・作成者・鑑定担当を解決
/// 4. 変更説明を作り、テンプレートデータを組み立てて検証
/// 5. 従業員メール・顧客メール・顧客SMSを送信
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `params` - リクエストパラメータ（ペイロードは`data`）
///
/// # 戻り値
/// チャネルごとの通知結果
///
/// # エラー
/// - Validation / NotFound (400): 入力の不備
/// - Template (500): テンプレートデータに空のフィールドがある
/// - Transport ほかポートのエラー (500)
///
/// 送信前に発生したエラーでは、どのチャネルも送信されない。
#[tracing::instrument(skip_all)]
pub async fn perform_return_status_notification(
    deps: &ServiceDependencies,
    params: &RequestParams,
) -> Result<NotificationResult> {
    let mut result = NotificationResult::default();

    // 1. リセラーの事前チェック
    if let Some(rejected) = precheck_reseller(params) {
        tracing::info!("Empty resellerId, nothing to notify");
        return Ok(rejected);
    }

    // 2. ペイロードの検証
    let request = validate_request(&deps.contractor_directory, params).await?;
    let reseller_id = request.reseller.id;

    // 3. 関係者の解決
    let parties =
        resolve_parties(&deps.contractor_directory, &request.reseller, request.data).await?;

    // 4. 変更説明とテンプレートデータ
    let change = ChangeSet::from_payload(payload::field(request.data, "differences"));
    let differences = describe_change(
        &deps.status_catalog,
        &deps.message_formatter,
        request.kind,
        change.as_ref(),
        reseller_id,
    )
    .await?;

    let template_data = assemble_template_data(request.data, &parties, differences);
    ensure_complete(&template_data)?;

    // 5. 送信
    dispatch(
        deps,
        DispatchContext {
            reseller: &request.reseller,
            client: &parties.client,
            kind: request.kind,
            change: change.as_ref(),
            template_data: &template_data,
        },
        &mut result,
    )
    .await?;

    tracing::info!(
        %reseller_id,
        client_id = %parties.client.id,
        employee_email = result.notification_employee_by_email,
        client_email = result.notification_client_by_email,
        client_sms = result.notification_client_by_sms.is_sent,
        "Return status notification processed"
    );

    Ok(result)
}
