//! 地図表示の計画
//!
//! 地図ウィジェット（Leaflet）そのものは扱わず、
//! 「どのマーカーをどこに描くか」「どこへ飛ぶか」だけを決める。

use std::time::Duration;

use serde::Serialize;

use crate::date::format_duty_date;
use crate::geo::{Bounds, LatLng};
use crate::links::call_uri;
use crate::types::PharmacyRecord;

/// 地図の挙動設定
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// 初期表示の中心（İzmir merkez）
    pub initial_center: LatLng,
    pub initial_zoom: f64,
    /// 薬局選択時のズーム
    pub selection_zoom: f64,
    /// 現在地へのセンタリング時のズーム（選択時より広い）
    pub locate_zoom: f64,
    pub fly_duration: Duration,
    /// マウント後にサイズ再計算するまでの待ち時間（1回のみ）
    pub resize_delay: Duration,
    /// Permissions APIの変更通知が使えない環境でのポーリング間隔
    pub permission_poll_interval: Duration,
    pub success_toast: Duration,
    pub error_toast: Duration,
    pub tile_url: String,
    pub tile_attribution: String,
    /// この範囲外の座標はマーカーにしない
    pub service_area: Bounds,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            initial_center: LatLng::new(38.4237, 27.1428),
            initial_zoom: 11.0,
            selection_zoom: 15.0,
            locate_zoom: 13.0,
            fly_duration: Duration::from_millis(1500),
            resize_delay: Duration::from_millis(100),
            permission_poll_interval: Duration::from_secs(5),
            success_toast: Duration::from_secs(3),
            error_toast: Duration::from_secs(5),
            tile_url: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png"
                .to_string(),
            tile_attribution: "&copy; OpenStreetMap".to_string(),
            service_area: Bounds::IZMIR,
        }
    }
}

/// カメラ移動の要求
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub target: LatLng,
    pub zoom: f64,
    pub duration: Duration,
}

impl FlyTo {
    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// 最新のカメラ要求だけを保持する（後勝ち、キューイングしない）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    latest: Option<FlyTo>,
    generation: u64,
}

impl Camera {
    /// 新しい要求で上書き
    pub fn request(&mut self, fly: FlyTo) {
        self.latest = Some(fly);
        self.generation += 1;
    }

    pub fn latest(&self) -> Option<FlyTo> {
        self.latest
    }

    /// 要求が出された回数（ウィジェット側の変更検知に使う）
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// マーカーのポップアップ内容
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub title: String,
    pub address: String,
    pub call_uri: String,
    pub duty_date: String,
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// 描画するマーカー1つ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// 描画の差分キー兼クリック時の識別子
    pub key: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub selected: bool,
    pub popup: Popup,
}

/// 地図に描くもの一式
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_marker: Option<LatLng>,
}

impl MapScene {
    /// クリックされたマーカーのキーから薬局名を引く
    pub fn name_for_key(&self, key: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.name.as_str())
    }
}

pub fn marker_key(name: &str, position: LatLng) -> String {
    format!("{}-{}-{}", name, position.lat, position.lng)
}

/// 表示中の薬局リストからシーンを組み立てる
///
/// 座標が不正・エリア外のレコードは黙って除外する。選択判定は名前で行う
/// （取得のたびにレコードが作り直されるため）。
pub fn render(
    records: &[PharmacyRecord],
    selected: Option<&PharmacyRecord>,
    user_location: Option<LatLng>,
    settings: &MapSettings,
) -> MapScene {
    let selected_name = selected.map(|r| r.name.as_str());

    let markers = records
        .iter()
        .filter_map(|record| {
            let position = record.plottable_in(&settings.service_area)?;
            Some(Marker {
                key: marker_key(&record.name, position),
                name: record.name.clone(),
                lat: position.lat,
                lng: position.lng,
                selected: selected_name == Some(record.name.as_str()),
                popup: popup_for(record),
            })
        })
        .collect();

    MapScene {
        markers,
        user_marker: user_location.filter(LatLng::is_valid),
    }
}

fn popup_for(record: &PharmacyRecord) -> Popup {
    Popup {
        title: record.name.clone(),
        address: record.address.clone(),
        call_uri: call_uri(record),
        duty_date: format_duty_date(&record.duty_date),
        district: record.district.clone(),
        note: record.district_note().map(str::to_string),
    }
}
