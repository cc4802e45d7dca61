use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 返品ステータス通知アプリケーション層のエラー
///
/// どのバリアントも操作全体を中断する。
/// SMS送信の失敗はエラーではなく、通知結果に記録される。
#[derive(Debug, Error)]
pub enum ReturnNotificationError {
    /// 入力が欠けている、または不正
    #[error("{0}")]
    Validation(String),

    /// 参照先が存在しない、または関係チェックに失敗した
    #[error("{0}")]
    NotFound(String),

    /// 組み立てたテンプレートデータに空のフィールドがある
    #[error("Template Data ({field}) is empty!")]
    Template { field: &'static str },

    /// メール送信の失敗
    #[error("Email transport error")]
    Transport(#[source] BoxError),

    /// ContractorDirectoryのエラー
    #[error("Contractor directory error")]
    Directory(#[source] BoxError),

    /// StatusCatalogのエラー
    #[error("Status catalog error")]
    StatusCatalog(#[source] BoxError),

    /// RecipientSettingsのエラー
    #[error("Recipient settings error")]
    Settings(#[source] BoxError),

    /// MessageFormatterのエラー
    #[error("Message formatter error")]
    Formatter(#[source] BoxError),
}

impl ReturnNotificationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// ステータス相当のコード
    ///
    /// 呼び出し元の入力に起因するものは400、それ以外は500。
    pub fn code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::NotFound(_) => 400,
            _ => 500,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ReturnNotificationError>;
