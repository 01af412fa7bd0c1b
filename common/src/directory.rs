//! 薬局ディレクトリAPI
//!
//! エンドポイントURLの組み立てとレスポンスのデコードのみを担当する。
//! HTTP呼び出し自体はプラットフォーム側（reqwest / web-sys fetch）が行う。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::PharmacyRecord;

/// İzmir Büyükşehir Belediyesi Açık Veri APIのベースURL
pub const DEFAULT_BASE_URL: &str = "https://openapi.izmir.bel.tr/api/ibb";

/// 取得対象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// 当番薬局のみ
    #[default]
    OnDuty,
    /// 全薬局
    All,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::OnDuty => "nobetcieczaneler",
            Endpoint::All => "eczaneler",
        }
    }
}

/// ベースURLとエンドポイントからURLを作る
pub fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path())
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// HTTPステータスと本文から薬局リストを得る
///
/// 2xx以外は本文を見ずに `Error::Network` を返す
pub fn decode_response(status: u16, body: &str) -> Result<Vec<PharmacyRecord>> {
    if !is_success(status) {
        return Err(Error::Network { status });
    }
    decode_records(body)
}

/// JSON配列をそのままデコード（フィールド検証はしない）
pub fn decode_records(body: &str) -> Result<Vec<PharmacyRecord>> {
    Ok(serde_json::from_str(body)?)
}
