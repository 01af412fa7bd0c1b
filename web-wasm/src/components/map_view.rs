//! 地図コンポーネント
//!
//! Leaflet本体はJS側。ここではシーンとカメラ要求の変化を監視して橋渡しする。

use eczane_common::{MapScene, MapSettings};
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::Flight;
use crate::leaflet::{self, MAP_CONTAINER_ID};

#[component]
pub fn MapView<FM>(
    settings: MapSettings,
    scene: Memo<MapScene>,
    flight: Memo<Flight>,
    on_marker_click: FM,
) -> impl IntoView
where
    FM: Fn(String) + 'static + Clone,
{
    let container = NodeRef::<Div>::new();
    let (ready, set_ready) = signal(false);

    // 地図の生成（コンテナがDOMに載った後に1回だけ）
    Effect::new(move |_| {
        if container.get().is_none() || ready.get_untracked() {
            return;
        }

        let on_marker_click = on_marker_click.clone();
        let on_click = Closure::<dyn FnMut(String)>::new(move |key: String| {
            let name = scene.with_untracked(|s| s.name_for_key(&key).map(str::to_string));
            if let Some(name) = name {
                on_marker_click(name);
            }
        });

        match leaflet::create_map(&settings, &on_click) {
            Ok(()) => {
                on_click.forget();
                set_ready.set(true);
                // 初回描画時にコンテナサイズが未確定だとタイルが灰色になるため、1回だけ再計算
                let delay = u32::try_from(settings.resize_delay.as_millis()).unwrap_or(100);
                Timeout::new(delay, leaflet::invalidate_size).forget();
            }
            Err(e) => console::error!("Harita oluşturulamadı:", e),
        }
    });

    // マーカー同期
    Effect::new(move |_| {
        if !ready.get() {
            return;
        }
        if let Err(e) = scene.with(leaflet::set_scene) {
            console::error!("Harita güncellenemedi:", e);
        }
    });

    // カメラ移動（後勝ち。世代が進んだときだけ飛ぶ）
    Effect::new(move |last_flown: Option<u64>| {
        let last_flown = last_flown.unwrap_or(0);
        if !ready.get() {
            return last_flown;
        }
        let (generation, latest) = flight.get();
        if generation == last_flown {
            return last_flown;
        }
        if let Some(fly) = latest {
            leaflet::fly_to(&fly);
        }
        generation
    });

    view! {
        <div id=MAP_CONTAINER_ID node_ref=container class="map-container"></div>
    }
}
