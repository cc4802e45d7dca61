use crate::application::return_status::{ServiceDependencies, perform_return_status_notification};
use crate::domain::{NotificationResult, RequestParams};
use axum::{Json, extract::State};
use std::sync::Arc;

use super::error::ApiError;

/// ハンドラー間で共有するアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// POST /notifications/return-status - 返品ステータス通知
///
/// ボディはリクエストパラメータのマップで、ペイロードは`data`に載る。
/// 緩い`Empty resellerId`拒否も含め、チャネルごとの結果を返す。
pub async fn notify_return_status(
    State(state): State<Arc<AppState>>,
    Json(params): Json<RequestParams>,
) -> Result<Json<NotificationResult>, ApiError> {
    let result = perform_return_status_notification(&state.service_deps, &params).await?;
    Ok(Json(result))
}
