//! 位置情報（Geolocation API / Permissions API）
//!
//! - request_position: 1回だけ現在地を取得
//! - watch_permission: 許可状態の購読（1本だけ）。Permissions APIが使えない環境
//!   （Safari等）では一定間隔のプローブにフォールバックする

use std::cell::{Cell, RefCell};
use std::time::Duration;

use eczane_common::{GeoError, LatLng, PermissionStatus};
use gloo::console;
use gloo::timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError, PermissionState, PositionOptions};

/// 1回の取得のタイムアウト
const POSITION_TIMEOUT_MS: u32 = 10_000;
/// キャッシュされた位置を許容する期間
const POSITION_MAX_AGE_MS: u32 = 60_000;

thread_local! {
    static WATCH_MODE: Cell<WatchMode> = const { Cell::new(WatchMode::Idle) };
    static PERMISSION_STATUS: RefCell<Option<web_sys::PermissionStatus>> = const { RefCell::new(None) };
}

fn geolocation() -> Option<Geolocation> {
    web_sys::window()?.navigator().geolocation().ok()
}

/// 現在地を1回取得
pub fn request_position<F>(on_result: F)
where
    F: Fn(Result<LatLng, GeoError>) + Clone + 'static,
{
    let Some(geolocation) = geolocation() else {
        on_result(Err(GeoError::PositionUnavailable));
        return;
    };

    let on_success = {
        let on_result = on_result.clone();
        Closure::once(move |position: GeolocationPosition| {
            let coords = position.coords();
            on_result(Ok(LatLng::new(coords.latitude(), coords.longitude())));
        })
    };
    let on_error = {
        let on_result = on_result.clone();
        Closure::once(move |error: GeolocationPositionError| {
            on_result(Err(GeoError::from_code(error.code())));
        })
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(POSITION_TIMEOUT_MS);
    options.set_maximum_age(POSITION_MAX_AGE_MS);

    let requested = geolocation.get_current_position_with_error_callback_and_options(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
        &options,
    );

    match requested {
        Ok(()) => {
            // コールバックはブラウザが1回だけ呼ぶ
            on_success.forget();
            on_error.forget();
        }
        Err(e) => {
            console::warn!("getCurrentPosition failed", e);
            on_result(Err(GeoError::PositionUnavailable));
        }
    }
}

/// 許可状態の購読方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchMode {
    Idle,
    /// Permissions API に問い合わせ中
    Querying,
    /// onchange を登録済み
    Subscribed,
    /// Permissions API が無くポーリング中
    Polling,
}

/// `watch_permission` が呼ばれたときにやること
#[derive(Debug, PartialEq, Eq)]
enum WatchStep {
    Subscribe,
    /// 登録済みの PermissionStatus から現在値を読み直す
    Requery,
    Probe,
    Skip,
}

fn step_for(mode: WatchMode) -> WatchStep {
    match mode {
        WatchMode::Idle => WatchStep::Subscribe,
        // 問い合わせ結果がそのまま通知される
        WatchMode::Querying => WatchStep::Skip,
        WatchMode::Subscribed => WatchStep::Requery,
        WatchMode::Polling => WatchStep::Probe,
    }
}

/// 許可状態を購読
///
/// 購読はページ内で1本だけ。再呼び出し（再確認）では現在値を読み直して通知する
pub fn watch_permission<F>(poll_interval: Duration, on_status: F)
where
    F: Fn(PermissionStatus) + Clone + 'static,
{
    match step_for(WATCH_MODE.with(Cell::get)) {
        WatchStep::Subscribe => {
            WATCH_MODE.with(|m| m.set(WatchMode::Querying));
            spawn_local(async move {
                match query_permission(on_status.clone()).await {
                    Ok(()) => WATCH_MODE.with(|m| m.set(WatchMode::Subscribed)),
                    Err(e) => {
                        console::log!("Permissions API unavailable, falling back to polling", e);
                        WATCH_MODE.with(|m| m.set(WatchMode::Polling));
                        probe_permission(on_status.clone());
                        let millis = u32::try_from(poll_interval.as_millis()).unwrap_or(u32::MAX);
                        Interval::new(millis, move || probe_permission(on_status.clone())).forget();
                    }
                }
            });
        }
        WatchStep::Requery => {
            let state = PERMISSION_STATUS.with(|s| s.borrow().as_ref().map(|s| s.state()));
            if let Some(state) = state {
                on_status(from_js_state(state));
            }
        }
        WatchStep::Probe => probe_permission(on_status),
        WatchStep::Skip => {}
    }
}

async fn query_permission<F>(on_status: F) -> Result<(), JsValue>
where
    F: Fn(PermissionStatus) + Clone + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let permissions = window.navigator().permissions()?;

    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(&descriptor, &"name".into(), &"geolocation".into())?;

    let result = JsFuture::from(permissions.query(&descriptor)?).await?;
    let status: web_sys::PermissionStatus = result.dyn_into()?;

    on_status(from_js_state(status.state()));

    let on_change = {
        let status = status.clone();
        Closure::<dyn FnMut()>::new(move || on_status(from_js_state(status.state())))
    };
    status.set_onchange(Some(on_change.as_ref().unchecked_ref()));
    // ページが生きている間は購読し続ける
    on_change.forget();
    PERMISSION_STATUS.with(|s| *s.borrow_mut() = Some(status));
    Ok(())
}

/// 小さな位置取得で許可状態を推定（成功=許可、コード1=拒否、それ以外は不明）
fn probe_permission<F>(on_status: F)
where
    F: Fn(PermissionStatus) + Clone + 'static,
{
    request_position(move |result| match result {
        Ok(_) => on_status(PermissionStatus::Granted),
        Err(GeoError::PermissionDenied) => on_status(PermissionStatus::Denied),
        Err(_) => {}
    });
}

fn from_js_state(state: PermissionState) -> PermissionStatus {
    match state {
        PermissionState::Granted => PermissionStatus::Granted,
        PermissionState::Denied => PermissionStatus::Denied,
        _ => PermissionStatus::Prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_watch_subscribes() {
        assert_eq!(step_for(WatchMode::Idle), WatchStep::Subscribe);
    }

    #[test]
    fn test_rewatch_does_not_resubscribe() {
        assert_eq!(step_for(WatchMode::Subscribed), WatchStep::Requery);
        assert_eq!(step_for(WatchMode::Querying), WatchStep::Skip);
        assert_eq!(step_for(WatchMode::Polling), WatchStep::Probe);
    }

    #[test]
    fn test_from_js_state() {
        assert_eq!(from_js_state(PermissionState::Granted), PermissionStatus::Granted);
        assert_eq!(from_js_state(PermissionState::Denied), PermissionStatus::Denied);
        assert_eq!(from_js_state(PermissionState::Prompt), PermissionStatus::Prompt);
    }
}
