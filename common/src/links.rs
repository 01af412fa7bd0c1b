//! 外部アクション用URI（電話・地図・経路）

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::types::PharmacyRecord;

const GOOGLE_MAPS_URL: &str = "https://www.google.com/maps";

/// "Ara" ボタン用の tel: URI
///
/// 番号は検証しない。空白だけ取り除く。
pub fn call_uri(record: &PharmacyRecord) -> String {
    let digits: String = record.phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// 地図で表示するURL
pub fn map_uri(record: &PharmacyRecord) -> String {
    match record.coordinates() {
        Some(p) => format!("{}?q={},{}", GOOGLE_MAPS_URL, p.lat, p.lng),
        None => format!("{}?q={}", GOOGLE_MAPS_URL, encoded_address(record)),
    }
}

/// "Yol Tarifi" (経路案内) 用URL
pub fn directions_uri(record: &PharmacyRecord) -> String {
    match record.coordinates() {
        Some(p) => format!("{}/dir/?api=1&destination={},{}", GOOGLE_MAPS_URL, p.lat, p.lng),
        None => format!(
            "{}/dir/?api=1&destination={}",
            GOOGLE_MAPS_URL,
            encoded_address(record)
        ),
    }
}

/// 座標が使えない場合の検索文字列（住所 + 地区 + İzmir）
fn encoded_address(record: &PharmacyRecord) -> String {
    let query = [record.address.trim(), record.district.trim(), "İzmir"]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    utf8_percent_encode(&query, NON_ALPHANUMERIC).to_string()
}
