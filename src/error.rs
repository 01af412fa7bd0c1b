use thiserror::Error;

#[derive(Error, Debug)]
pub enum EczaneError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Eczane bulunamadı: {0}")]
    PharmacyNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, EczaneError>;
