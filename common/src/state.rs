//! アプリケーション状態（選択・位置情報・通知）
//!
//! 画面の状態はすべて `AppState` が持ち、UIからは `Intent` を送るだけ。
//! `apply` は状態を更新し、プラットフォーム側が実行すべき `Effect` を返す。
//!
//! ## 遷移ルール
//! - 薬局を選択するとカメラがその座標へ飛ぶ（同じ薬局の再選択は何もしない）
//! - 詳細パネルを閉じても地図は動かない
//! - 許可状態が実際に `Denied` へ変わったときだけ警告を出す
//! - 許可状態は一度 `Prompt` を離れたら戻らない
//! - 現在地を取得したら選択時より広いズームでセンタリング
//! - タイムアウト等の取得失敗は許可状態を変えない

use std::time::Duration;

use crate::directory::Endpoint;
use crate::filter::filter;
use crate::geo::{GeoError, LatLng, PermissionStatus};
use crate::map::{render, Camera, FlyTo, MapScene, MapSettings};
use crate::types::PharmacyRecord;

pub const MSG_DIRECTORY_UPDATED: &str = "Eczaneler güncellendi";
pub const MSG_DIRECTORY_FAILED: &str =
    "Eczane listesi alınamadı. Lütfen internetinizi kontrol edin.";

/// UIからの意図
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// リストの再取得
    Reload,
    DirectoryLoaded(Vec<PharmacyRecord>),
    /// 取得失敗（理由はログ用）
    DirectoryFailed(String),
    SearchChanged(String),
    /// リスト項目またはマーカーのクリック
    Select(PharmacyRecord),
    /// 名前で選択（マーカーキーから引いた場合など）。見つからなければ何もしない
    SelectNamed(String),
    DismissDetail,
    PermissionChanged(PermissionStatus),
    PositionReceived(LatLng),
    PositionFailed(GeoError),
    DismissLocationWarning,
    RetryLocationPermission,
    DismissNotification(u64),
    ToggleSidebar,
}

/// プラットフォーム側で実行する副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchDirectory(Endpoint),
    /// 許可状態の確認（購読の開始）
    CheckPermission,
    /// 1回だけ現在地を取得
    RequestPosition,
    /// 指定時間後に `DismissNotification(id)` を送る
    ScheduleDismiss { id: u64, after: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// 一時的な通知（トースト）
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// 画面全体の状態
#[derive(Debug, Clone)]
pub struct AppState {
    settings: MapSettings,
    endpoint: Endpoint,
    records: Vec<PharmacyRecord>,
    query: String,
    loading: bool,
    selected: Option<PharmacyRecord>,
    user_location: Option<LatLng>,
    permission: PermissionStatus,
    show_location_warning: bool,
    notification: Option<Notification>,
    next_notification_id: u64,
    sidebar_open: bool,
    camera: Camera,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MapSettings::default())
    }
}

impl AppState {
    pub fn new(settings: MapSettings) -> Self {
        Self {
            settings,
            endpoint: Endpoint::OnDuty,
            records: Vec::new(),
            query: String::new(),
            loading: false,
            selected: None,
            user_location: None,
            permission: PermissionStatus::Prompt,
            show_location_warning: false,
            notification: None,
            next_notification_id: 0,
            sidebar_open: true,
            camera: Camera::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// マウント時の初期化
    pub fn start(&mut self) -> Vec<Effect> {
        self.loading = true;
        vec![
            Effect::FetchDirectory(self.endpoint),
            Effect::CheckPermission,
            Effect::RequestPosition,
        ]
    }

    /// 意図を適用する
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Reload => {
                self.loading = true;
                vec![Effect::FetchDirectory(self.endpoint)]
            }
            Intent::DirectoryLoaded(records) => self.on_loaded(records),
            Intent::DirectoryFailed(_) => {
                self.loading = false;
                self.records.clear();
                self.selected = None;
                self.notify(NotificationKind::Error, MSG_DIRECTORY_FAILED)
            }
            Intent::SearchChanged(query) => {
                self.query = query;
                Vec::new()
            }
            Intent::Select(record) => {
                self.select(record);
                Vec::new()
            }
            Intent::SelectNamed(name) => {
                if let Some(record) = self.records.iter().find(|r| r.name == name).cloned() {
                    self.select(record);
                }
                Vec::new()
            }
            Intent::DismissDetail => {
                self.selected = None;
                Vec::new()
            }
            Intent::PermissionChanged(status) => self.on_permission(status),
            Intent::PositionReceived(point) => self.on_position(point),
            Intent::PositionFailed(error) => {
                if error.is_denial() {
                    self.on_permission(PermissionStatus::Denied)
                } else {
                    Vec::new()
                }
            }
            Intent::DismissLocationWarning => {
                self.show_location_warning = false;
                Vec::new()
            }
            Intent::RetryLocationPermission => {
                self.show_location_warning = false;
                vec![Effect::CheckPermission, Effect::RequestPosition]
            }
            Intent::DismissNotification(id) => {
                if self.notification.as_ref().is_some_and(|n| n.id == id) {
                    self.notification = None;
                }
                Vec::new()
            }
            Intent::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                Vec::new()
            }
        }
    }

    fn on_loaded(&mut self, records: Vec<PharmacyRecord>) -> Vec<Effect> {
        self.loading = false;
        // 前回のリストとはマージしない。選択だけ同名レコードに付け替える
        self.selected = self
            .selected
            .take()
            .and_then(|old| records.iter().find(|r| r.name == old.name).cloned());
        self.records = records;
        self.notify(NotificationKind::Success, MSG_DIRECTORY_UPDATED)
    }

    fn select(&mut self, record: PharmacyRecord) {
        if self.selected.as_ref().is_some_and(|s| s.name == record.name) {
            return;
        }

        if let Some(target) = record.plottable_in(&self.settings.service_area) {
            self.camera.request(FlyTo {
                target,
                zoom: self.settings.selection_zoom,
                duration: self.settings.fly_duration,
            });
        }
        self.selected = Some(record);
    }

    fn on_permission(&mut self, status: PermissionStatus) -> Vec<Effect> {
        // Prompt からは一方通行。以降は Granted と Denied の間だけ動く
        if status == self.permission || status == PermissionStatus::Prompt {
            return Vec::new();
        }
        self.permission = status;

        match status {
            PermissionStatus::Denied => {
                self.show_location_warning = true;
                Vec::new()
            }
            PermissionStatus::Granted => {
                self.show_location_warning = false;
                if self.user_location.is_none() {
                    vec![Effect::RequestPosition]
                } else {
                    Vec::new()
                }
            }
            PermissionStatus::Prompt => Vec::new(),
        }
    }

    fn on_position(&mut self, point: LatLng) -> Vec<Effect> {
        if !point.is_valid() {
            return Vec::new();
        }

        self.user_location = Some(point);
        // Permissions APIが無い環境では取得成功を許可とみなす
        if self.permission != PermissionStatus::Granted {
            self.permission = PermissionStatus::Granted;
            self.show_location_warning = false;
        }
        self.camera.request(FlyTo {
            target: point,
            zoom: self.settings.locate_zoom,
            duration: self.settings.fly_duration,
        });
        Vec::new()
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) -> Vec<Effect> {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification {
            id,
            kind,
            message: message.to_string(),
        });

        let after = match kind {
            NotificationKind::Success => self.settings.success_toast,
            NotificationKind::Error => self.settings.error_toast,
        };
        vec![Effect::ScheduleDismiss { id, after }]
    }

    // ============================================
    // 読み取り専用ビュー
    // ============================================

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    /// 取得したままの全件
    pub fn records(&self) -> &[PharmacyRecord] {
        &self.records
    }

    /// 検索で絞り込んだ表示対象
    pub fn visible(&self) -> Vec<PharmacyRecord> {
        filter(&self.records, &self.query)
    }

    /// 表示対象から組み立てた地図シーン
    pub fn scene(&self) -> MapScene {
        render(
            &self.visible(),
            self.selected.as_ref(),
            self.user_location,
            &self.settings,
        )
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<&PharmacyRecord> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, record: &PharmacyRecord) -> bool {
        self.selected.as_ref().is_some_and(|s| s.name == record.name)
    }

    pub fn user_location(&self) -> Option<LatLng> {
        self.user_location
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    pub fn show_location_warning(&self) -> bool {
        self.show_location_warning
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
