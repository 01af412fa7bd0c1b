//! メインアプリケーションコンポーネント
//!
//! 状態は `AppState` 1つを `RwSignal` で持つ。子コンポーネントには
//! 読み取り専用の派生値（Memo）とコールバックだけを渡し、
//! 変更はすべて `Dispatcher::send` 経由の `Intent` で行う。

use eczane_common::{AppState, Effect as AppEffect, FlyTo, Intent, MapSettings, PharmacyRecord};
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::directory::load_directory;
use crate::components::{
    detail_panel::DetailPanel,
    location_warning::LocationWarning,
    map_view::MapView,
    mobile_header::MobileHeader,
    sidebar::Sidebar,
    toast::Toast,
};
use crate::geolocation;

/// Intentを状態に適用し、返ってきたEffectを実行する
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AppState>,
}

impl Dispatcher {
    pub fn new(state: RwSignal<AppState>) -> Self {
        Self { state }
    }

    /// マウント時の初期化（取得・許可確認・現在地）
    pub fn start(self) {
        let mut effects = Vec::new();
        self.state.update(|s| effects = s.start());
        self.run(effects);
    }

    pub fn send(self, intent: Intent) {
        let mut effects = Vec::new();
        self.state.update(|s| effects = s.apply(intent));
        self.run(effects);
    }

    fn run(self, effects: Vec<AppEffect>) {
        for effect in effects {
            match effect {
                AppEffect::FetchDirectory(endpoint) => {
                    spawn_local(async move {
                        match load_directory(endpoint).await {
                            Ok(records) => {
                                console::log!(format!("{} eczane yüklendi", records.len()));
                                self.send(Intent::DirectoryLoaded(records));
                            }
                            Err(e) => {
                                console::error!("Veri çekme hatası:", e.to_string());
                                self.send(Intent::DirectoryFailed(e.to_string()));
                            }
                        }
                    });
                }
                AppEffect::CheckPermission => {
                    let interval = self
                        .state
                        .with_untracked(|s| s.settings().permission_poll_interval);
                    geolocation::watch_permission(interval, move |status| {
                        self.send(Intent::PermissionChanged(status));
                    });
                }
                AppEffect::RequestPosition => {
                    geolocation::request_position(move |result| match result {
                        Ok(point) => self.send(Intent::PositionReceived(point)),
                        Err(e) => {
                            console::log!("Konum alınamadı:", e.to_string());
                            self.send(Intent::PositionFailed(e));
                        }
                    });
                }
                AppEffect::ScheduleDismiss { id, after } => {
                    let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || self.send(Intent::DismissNotification(id)))
                        .forget();
                }
            }
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let settings = MapSettings::default();
    let state = RwSignal::new(AppState::new(settings.clone()));
    let dispatcher = Dispatcher::new(state);

    // 読み取り専用ビュー
    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let scene = Memo::new(move |_| state.with(|s| s.scene()));
    let flight = Memo::new(move |_| {
        state.with(|s| (s.camera().generation(), s.camera().latest()))
    });
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));
    let selected_name = Memo::new(move |_| state.with(|s| s.selected().map(|r| r.name.clone())));
    let notification = Memo::new(move |_| state.with(|s| s.notification().cloned()));
    let query = Memo::new(move |_| state.with(|s| s.query().to_string()));
    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let sidebar_open = Memo::new(move |_| state.with(|s| s.sidebar_open()));
    let show_warning = Memo::new(move |_| state.with(|s| s.show_location_warning()));

    // 初回のみ実行
    Effect::new(move |_| dispatcher.start());

    let on_search = move |q: String| dispatcher.send(Intent::SearchChanged(q));
    let on_select = move |record: PharmacyRecord| dispatcher.send(Intent::Select(record));
    let on_reload = move |_: ()| dispatcher.send(Intent::Reload);
    let on_toggle_sidebar = move |_: ()| dispatcher.send(Intent::ToggleSidebar);
    let on_marker_click = move |name: String| dispatcher.send(Intent::SelectNamed(name));
    let on_dismiss_detail = move |_: ()| dispatcher.send(Intent::DismissDetail);
    let on_retry_location = move |_: ()| dispatcher.send(Intent::RetryLocationPermission);
    let on_dismiss_warning = move |_: ()| dispatcher.send(Intent::DismissLocationWarning);
    let on_dismiss_toast = move |id: u64| dispatcher.send(Intent::DismissNotification(id));

    view! {
        <div class="app">
            <Sidebar
                visible=visible
                query=query
                loading=loading
                open=sidebar_open
                selected_name=selected_name
                on_search=on_search
                on_select=on_select
                on_reload=on_reload
            />

            <main class="map-area">
                <MobileHeader
                    count=Signal::derive(move || visible.with(|v| v.len()))
                    query=query
                    on_search=on_search
                    on_toggle_sidebar=on_toggle_sidebar
                />

                <MapView
                    settings=settings
                    scene=scene
                    flight=flight
                    on_marker_click=on_marker_click
                />

                <DetailPanel selected=selected on_dismiss=on_dismiss_detail />

                <LocationWarning
                    visible=show_warning
                    on_retry=on_retry_location
                    on_dismiss=on_dismiss_warning
                />

                <Toast notification=notification on_dismiss=on_dismiss_toast />
            </main>
        </div>
    }
}

/// カメラ要求の派生値（世代, 最新の要求）
pub type Flight = (u64, Option<FlyTo>);
