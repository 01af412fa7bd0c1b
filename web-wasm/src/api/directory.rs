//! 薬局ディレクトリ取得（fetch API）
//!
//! 失敗時はエラーを返すだけ。空リストへの置き換えや通知は呼び出し側（AppState）が行う。
//! リトライもキャッシュもしない。

use eczane_common::{decode_response, endpoint_url, Endpoint, Error, PharmacyRecord, DEFAULT_BASE_URL};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 薬局リストを取得
pub async fn load_directory(endpoint: Endpoint) -> Result<Vec<PharmacyRecord>, Error> {
    let url = endpoint_url(DEFAULT_BASE_URL, endpoint);
    let (status, body) = fetch_text(&url)
        .await
        .map_err(|e| Error::Transport(js_error_message(&e)))?;
    decode_response(status, &body)
}

/// GETしてステータスと本文を返す
async fn fetch_text(url: &str) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let text = JsFuture::from(resp.text()?).await?;
    Ok((status, text.as_string().unwrap_or_default()))
}

/// JsValue（TypeError等）を表示用文字列に
fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
