//! エラーケーステスト

use izmir_eczane::error::EczaneError;

/// EczaneErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        EczaneError::Config("テスト設定エラー".to_string()),
        EczaneError::PharmacyNotFound("Deniz".to_string()),
        EczaneError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty(), "Error message should not be empty");
    }
}

#[test]
fn test_json_conversion() {
    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: EczaneError = json.into();
    assert!(matches!(err, EczaneError::JsonParse(_)));
}

#[test]
fn test_not_found_names_pharmacy() {
    let err = EczaneError::PharmacyNotFound("Işık".to_string());
    assert_eq!(err.to_string(), "Eczane bulunamadı: Işık");
}

#[test]
fn test_io_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: EczaneError = io.into();
    assert!(matches!(err, EczaneError::Io(_)));
}
