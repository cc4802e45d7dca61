use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, notify_return_status};

/// APIルーターを作成する
///
/// - GET /health - ヘルスチェック
/// - POST /notifications/return-status - 返品ステータス通知
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/notifications/return-status", post(notify_return_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// ヘルスチェックエンドポイント
async fn health_check() -> &'static str {
    "OK"
}
