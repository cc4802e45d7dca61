use crate::application::return_status::ReturnNotificationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// エラー自身のコードがHTTPステータスになる。
#[derive(Debug)]
pub struct ApiError(ReturnNotificationError);

impl From<ReturnNotificationError> for ApiError {
    fn from(err: ReturnNotificationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let (error_type, message) = match self.0 {
            // 400 Bad Request - 呼び出し元の入力不備
            ReturnNotificationError::Validation(msg) => ("VALIDATION_ERROR", msg),
            ReturnNotificationError::NotFound(msg) => ("NOT_FOUND", msg),

            // 500 Internal Server Error - テンプレートデータの欠落
            ref err @ ReturnNotificationError::Template { .. } => {
                tracing::error!("{}", err);
                ("TEMPLATE_ERROR", err.to_string())
            }

            // 500 Internal Server Error - 協調先の障害（詳細はログのみ）
            ReturnNotificationError::Transport(ref e) => {
                tracing::error!("Email transport error: {}", e);
                ("EMAIL_TRANSPORT_ERROR", "Failed to send email".to_string())
            }
            ReturnNotificationError::Directory(ref e) => {
                tracing::error!("Contractor directory error: {}", e);
                (
                    "CONTRACTOR_DIRECTORY_ERROR",
                    "Contractor lookup failed".to_string(),
                )
            }
            ReturnNotificationError::StatusCatalog(ref e) => {
                tracing::error!("Status catalog error: {}", e);
                ("STATUS_CATALOG_ERROR", "Status lookup failed".to_string())
            }
            ReturnNotificationError::Settings(ref e) => {
                tracing::error!("Recipient settings error: {}", e);
                (
                    "RECIPIENT_SETTINGS_ERROR",
                    "Recipient settings lookup failed".to_string(),
                )
            }
            ReturnNotificationError::Formatter(ref e) => {
                tracing::error!("Message formatter error: {}", e);
                (
                    "MESSAGE_FORMATTER_ERROR",
                    "Message rendering failed".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
