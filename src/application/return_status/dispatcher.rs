use crate::domain::{
    ChangeSet, Contractor, GOODS_RETURN_PERMIT, NotificationEvent, NotificationKind,
    NotificationResult, TemplateData,
};
use crate::ports::{EmailMessage, MessageParams, SmsRequest};

use super::errors::{Result, ReturnNotificationError};
use super::service::ServiceDependencies;

/// 従業員メールの件名テンプレートキー
pub const EMPLOYEE_EMAIL_SUBJECT: &str = "complaintEmployeeEmailSubject";
/// 従業員メールの本文テンプレートキー
pub const EMPLOYEE_EMAIL_BODY: &str = "complaintEmployeeEmailBody";
/// 顧客メールの件名テンプレートキー
pub const CLIENT_EMAIL_SUBJECT: &str = "complaintClientEmailSubject";
/// 顧客メールの本文テンプレートキー
pub const CLIENT_EMAIL_BODY: &str = "complaintClientEmailBody";

/// 1回の通知で各チャネルが必要とする情報
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    pub reseller: &'a Contractor,
    pub client: &'a Contractor,
    pub kind: NotificationKind,
    pub change: Option<&'a ChangeSet>,
    pub template_data: &'a TemplateData,
}

impl DispatchContext<'_> {
    /// 顧客チャネルは遷移先のあるステータス変更でのみ動く
    fn target_change(&self) -> Option<&ChangeSet> {
        match self.kind {
            NotificationKind::Change => self.change.filter(|change| change.has_target()),
            _ => None,
        }
    }
}

/// テンプレートをリセラーのロケールでレンダリングするヘルパー関数
async fn render(
    deps: &ServiceDependencies,
    key: &str,
    params: &MessageParams,
    ctx: &DispatchContext<'_>,
) -> Result<String> {
    deps.message_formatter
        .render(key, Some(params), ctx.reseller.id)
        .await
        .map_err(ReturnNotificationError::Formatter)
}

/// 該当するすべてのチャネルで送信し、結果を`result`に記録する
///
/// 処理フロー：
/// 1. リセラーの送信元アドレスを取得
/// 2. 従業員メール（送信元と宛先がある場合、宛先ごとに順に送信）
/// 3. 遷移先のあるステータス変更の場合のみ：
///    - 顧客メール（送信元と顧客アドレスがある場合）
///    - 顧客SMS（携帯電話番号がある場合、顧客メールとは独立）
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `ctx` - 通知内容
/// * `result` - チャネルごとの通知結果（処理したチャネルだけを書き換える）
///
/// # エラー
/// - Transport: メール送信の失敗（残りの送信は行わない）
/// - Settings / Formatter: ポートのI/Oエラー
///
/// SMS送信の失敗はエラーにせず、`result`に記録する。
pub async fn dispatch(
    deps: &ServiceDependencies,
    ctx: DispatchContext<'_>,
    result: &mut NotificationResult,
) -> Result<()> {
    let reseller_id = ctx.reseller.id;
    let sender = deps
        .recipient_settings
        .sender_email(reseller_id)
        .await
        .map_err(ReturnNotificationError::Settings)?
        .filter(|from| !from.is_empty());
    let params = ctx.template_data.to_params();

    notify_employees(deps, &ctx, sender.as_deref(), &params, result).await?;

    if let Some(change) = ctx.target_change() {
        if let Some(from) = sender.as_deref() {
            notify_client_by_email(deps, &ctx, change, from, &params, result).await?;
        }
        notify_client_by_sms(deps, &ctx, change, result).await;
    }

    Ok(())
}

/// 従業員メール：権限を持つ宛先ごとに1通ずつ送信する
async fn notify_employees(
    deps: &ServiceDependencies,
    ctx: &DispatchContext<'_>,
    sender: Option<&str>,
    params: &MessageParams,
    result: &mut NotificationResult,
) -> Result<()> {
    let reseller_id = ctx.reseller.id;
    let recipients = deps
        .recipient_settings
        .permitted_emails(reseller_id, GOODS_RETURN_PERMIT)
        .await
        .map_err(ReturnNotificationError::Settings)?;

    let Some(from) = sender else {
        tracing::debug!(%reseller_id, "No sender address, skipping employee email");
        return Ok(());
    };

    for recipient in recipients {
        let message = EmailMessage {
            from: from.to_string(),
            to: recipient,
            subject: render(deps, EMPLOYEE_EMAIL_SUBJECT, params, ctx).await?,
            body: render(deps, EMPLOYEE_EMAIL_BODY, params, ctx).await?,
            reseller_id,
            event: NotificationEvent::ChangeReturnStatus,
            client_id: None,
            status_to: None,
        };

        deps.email_transport
            .send(&message)
            .await
            .map_err(ReturnNotificationError::Transport)?;

        tracing::info!(
            %reseller_id,
            recipient = %message.to,
            channel = "employee_email",
            "Email sent"
        );
        result.notification_employee_by_email = true;
    }

    Ok(())
}

/// 顧客メール
async fn notify_client_by_email(
    deps: &ServiceDependencies,
    ctx: &DispatchContext<'_>,
    change: &ChangeSet,
    from: &str,
    params: &MessageParams,
    result: &mut NotificationResult,
) -> Result<()> {
    let Some(to) = ctx.client.contact_email() else {
        return Ok(());
    };

    let message = EmailMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: render(deps, CLIENT_EMAIL_SUBJECT, params, ctx).await?,
        body: render(deps, CLIENT_EMAIL_BODY, params, ctx).await?,
        reseller_id: ctx.reseller.id,
        event: NotificationEvent::ChangeReturnStatus,
        client_id: Some(ctx.client.id),
        status_to: Some(change.to_status_id()),
    };

    deps.email_transport
        .send(&message)
        .await
        .map_err(ReturnNotificationError::Transport)?;

    tracing::info!(
        reseller_id = %ctx.reseller.id,
        client_id = %ctx.client.id,
        channel = "client_email",
        "Email sent"
    );
    result.notification_client_by_email = true;

    Ok(())
}

/// 顧客SMS：送信結果と説明をそのまま`result`へ写す
async fn notify_client_by_sms(
    deps: &ServiceDependencies,
    ctx: &DispatchContext<'_>,
    change: &ChangeSet,
    result: &mut NotificationResult,
) {
    if ctx.client.contact_mobile().is_none() {
        return;
    }

    let request = SmsRequest {
        reseller_id: ctx.reseller.id,
        client_id: ctx.client.id,
        event: NotificationEvent::ChangeReturnStatus,
        status_to: change.to_status_id(),
        template_data: ctx.template_data.clone(),
    };
    let outcome = deps.sms_transport.send(&request).await;

    if outcome.sent {
        result.notification_client_by_sms.is_sent = true;
    }
    if let Some(error) = outcome.error.filter(|error| !error.is_empty()) {
        tracing::warn!(client_id = %request.client_id, %error, "SMS not delivered");
        result.notification_client_by_sms.message = error;
    }
}
