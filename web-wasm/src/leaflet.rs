//! Leaflet JavaScript Bridge バインディング
//!
//! 地図ウィジェットはJavaScript側（Leaflet）に委譲する。
//! Rust側はシーン（マーカー一覧）とカメラ要求をJSONで渡すだけ。

use eczane_common::{FlyTo, LatLng, MapScene, MapSettings};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// 地図を描画するコンテナのDOM id
pub const MAP_CONTAINER_ID: &str = "pharmacy-map";

// ============================================
// データ型定義
// ============================================

/// JavaScript側に渡す初期化オプション
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsMapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl From<&MapSettings> for JsMapOptions {
    fn from(settings: &MapSettings) -> Self {
        Self {
            center: settings.initial_center,
            zoom: settings.initial_zoom,
            tile_url: settings.tile_url.clone(),
            attribution: settings.tile_attribution.clone(),
        }
    }
}

// ============================================
// JavaScript関数のextern宣言
// ============================================

#[wasm_bindgen(module = "/js/leaflet-bridge.js")]
extern "C" {
    /// 地図を生成
    ///
    /// # Arguments
    /// * `container_id` - コンテナ要素のid
    /// * `options_json` - JsMapOptionsのJSON文字列
    /// * `on_marker_click` - マーカークリック時にキーを受け取るコールバック
    #[wasm_bindgen(js_name = "createMap", catch)]
    fn create_map_js(
        container_id: &str,
        options_json: &str,
        on_marker_click: &Closure<dyn FnMut(String)>,
    ) -> Result<(), JsValue>;

    /// マーカーと現在地マーカーを置き換える
    #[wasm_bindgen(js_name = "setScene")]
    fn set_scene_js(scene_json: &str);

    #[wasm_bindgen(js_name = "flyTo")]
    fn fly_to_js(lat: f64, lng: f64, zoom: f64, duration_secs: f64);

    #[wasm_bindgen(js_name = "invalidateSize")]
    fn invalidate_size_js();
}

// ============================================
// Rust側ラッパー
// ============================================

pub fn create_map(
    settings: &MapSettings,
    on_marker_click: &Closure<dyn FnMut(String)>,
) -> Result<(), String> {
    let options_json = serde_json::to_string(&JsMapOptions::from(settings))
        .map_err(|e| format!("options serialize error: {}", e))?;
    create_map_js(MAP_CONTAINER_ID, &options_json, on_marker_click)
        .map_err(|e| format!("createMap failed: {:?}", e))
}

pub fn set_scene(scene: &MapScene) -> Result<(), String> {
    let scene_json =
        serde_json::to_string(scene).map_err(|e| format!("scene serialize error: {}", e))?;
    set_scene_js(&scene_json);
    Ok(())
}

/// 進行中のアニメーションはLeaflet側で上書きされる
pub fn fly_to(fly: &FlyTo) {
    fly_to_js(fly.target.lat, fly.target.lng, fly.zoom, fly.duration_secs());
}

/// コンテナサイズ確定後のタイル再描画
pub fn invalidate_size() {
    invalidate_size_js();
}
