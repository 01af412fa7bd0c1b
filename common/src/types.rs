//! 薬局レコードの型定義
//!
//! İzmir Büyükşehir Belediyesi Açık Veri APIの1件分。
//! JSONのキーはAPIのトルコ語名（Adi, Adres, ...）のまま受け取る。

use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::{Bounds, LatLng};

/// 薬局1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PharmacyRecord {
    /// 薬局名（1回の取得内で実質的なキー）
    #[serde(rename = "Adi", default, deserialize_with = "loose_string")]
    pub name: String,

    #[serde(rename = "Adres", default, deserialize_with = "loose_string")]
    pub address: String,

    #[serde(rename = "Telefon", default, deserialize_with = "loose_string")]
    pub phone: String,

    /// 地区（ilçe）
    #[serde(rename = "Bolge", default, deserialize_with = "loose_string")]
    pub district: String,

    #[serde(
        rename = "BolgeAciklama",
        default,
        deserialize_with = "loose_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub district_note: Option<String>,

    /// 当番開始日時
    #[serde(rename = "Tarih", default, deserialize_with = "loose_string")]
    pub duty_date: String,

    /// 緯度（文字列）
    #[serde(rename = "LokasyonX", default, deserialize_with = "loose_string")]
    pub location_x: String,

    /// 経度（文字列）
    #[serde(rename = "LokasyonY", default, deserialize_with = "loose_string")]
    pub location_y: String,
}

impl PharmacyRecord {
    /// 緯度経度をパース
    ///
    /// 数値でない、または地球上の座標として不正な場合はNone
    pub fn coordinates(&self) -> Option<LatLng> {
        let lat = parse_coordinate(&self.location_x)?;
        let lng = parse_coordinate(&self.location_y)?;
        let point = LatLng::new(lat, lng);
        point.is_valid().then_some(point)
    }

    /// サービスエリア内の座標を持つか（地図に描画できるか）
    pub fn plottable_in(&self, area: &Bounds) -> Option<LatLng> {
        self.coordinates().filter(|p| area.contains(*p))
    }

    /// 空白のみの注記は無いものとして扱う
    pub fn district_note(&self) -> Option<&str> {
        self.district_note
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// APIは同じフィールドを文字列でも数値でも返すことがある
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl LooseValue {
    fn into_string(self) -> String {
        match self {
            LooseValue::Text(s) => s,
            LooseValue::Integer(n) => n.to_string(),
            LooseValue::Float(n) => n.to_string(),
            LooseValue::Flag(b) => b.to_string(),
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseValue>::deserialize(deserializer)?
        .map(LooseValue::into_string)
        .unwrap_or_default())
}

fn loose_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseValue>::deserialize(deserializer)?.map(LooseValue::into_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: &str, y: &str) -> PharmacyRecord {
        PharmacyRecord {
            name: "Çınar Eczanesi".to_string(),
            location_x: x.to_string(),
            location_y: y.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "Adi": "Çınar Eczanesi",
            "Adres": "1203/4 Sk. No:5",
            "Telefon": "2321234567",
            "Bolge": "Konak",
            "BolgeAciklama": "Çankaya Metro yanı",
            "Tarih": "2025-01-01T09:00:00Z",
            "LokasyonX": "38.41",
            "LokasyonY": "27.12",
            "EczaneId": 42
        }"#;

        let record: PharmacyRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.name, "Çınar Eczanesi");
        assert_eq!(record.district, "Konak");
        assert_eq!(record.district_note(), Some("Çankaya Metro yanı"));
        assert_eq!(record.coordinates(), Some(LatLng::new(38.41, 27.12)));
    }

    #[test]
    fn test_deserialize_numeric_and_null_fields() {
        let json = r#"{
            "Adi": "Deniz Eczanesi",
            "Telefon": 2329876543,
            "Bolge": null,
            "BolgeAciklama": null,
            "LokasyonX": 38.46,
            "LokasyonY": 27.21
        }"#;

        let record: PharmacyRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.phone, "2329876543");
        assert_eq!(record.district, "");
        assert_eq!(record.district_note, None);
        assert_eq!(record.address, "");
        assert_eq!(record.coordinates(), Some(LatLng::new(38.46, 27.21)));
    }

    #[test]
    fn test_coordinates_non_numeric() {
        assert_eq!(record("", "27.12").coordinates(), None);
        assert_eq!(record("38.41", "abc").coordinates(), None);
        assert_eq!(record("NaN", "27.12").coordinates(), None);
    }

    #[test]
    fn test_coordinates_trims_whitespace() {
        assert_eq!(record(" 38.41 ", "27.12\n").coordinates(), Some(LatLng::new(38.41, 27.12)));
    }

    #[test]
    fn test_plottable_outside_area() {
        let area = Bounds::IZMIR;
        assert!(record("38.41", "27.12").plottable_in(&area).is_some());
        assert!(record("0", "0").plottable_in(&area).is_none());
    }

    #[test]
    fn test_blank_district_note() {
        let mut r = record("38.41", "27.12");
        r.district_note = Some("   ".to_string());
        assert_eq!(r.district_note(), None);
    }
}
