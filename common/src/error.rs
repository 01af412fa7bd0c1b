//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 2xx以外のHTTPステータス
    #[error("Ağ hatası: {status}")]
    Network { status: u16 },

    /// 通信そのものの失敗（DNS、接続断、CORSなど）
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTPステータス起因のエラーならステータスコードを返す
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network { status: 503 };
        assert_eq!(format!("{}", error), "Ağ hatası: 503");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_status() {
        assert_eq!(Error::Network { status: 404 }.status(), Some(404));
        assert_eq!(Error::Transport("offline".to_string()).status(), None);
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Transport("connection refused".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Transport"));
        assert!(debug.contains("connection refused"));
    }
}
