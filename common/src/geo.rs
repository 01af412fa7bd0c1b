//! 座標・位置情報まわりの型
//!
//! - LatLng: 緯度経度ペア
//! - Bounds: サービス対象エリア（矩形）
//! - PermissionStatus: ブラウザの位置情報許可状態
//! - GeoError: 位置取得の失敗種別

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 緯度経度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// 地球上の座標として妥当か（NaN/無限大/範囲外を除外）
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// 矩形エリア
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// İzmir ili全域を覆う矩形
    pub const IZMIR: Bounds = Bounds {
        south: 37.8,
        west: 26.0,
        north: 39.6,
        east: 28.6,
    };

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

/// 位置情報の許可状態（Permissions APIの PermissionState と同じ3値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    #[default]
    Prompt,
    Granted,
    Denied,
}

/// 位置取得の失敗
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoError {
    #[error("konum izni reddedildi")]
    PermissionDenied,

    #[error("konum bilgisi alınamadı")]
    PositionUnavailable,

    #[error("konum isteği zaman aşımına uğradı")]
    Timeout,
}

impl GeoError {
    /// GeolocationPositionError.code (1/2/3) から変換
    ///
    /// 未知のコードは PositionUnavailable 扱い（許可状態を変えない側に倒す）
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeoError::PermissionDenied,
            3 => GeoError::Timeout,
            _ => GeoError::PositionUnavailable,
        }
    }

    /// 明示的な拒否かどうか
    pub fn is_denial(&self) -> bool {
        matches!(self, GeoError::PermissionDenied)
    }
}
