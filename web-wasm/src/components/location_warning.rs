//! 位置情報が拒否されているときの警告
//!
//! 閉じてもセッション中だけ。許可状態が実際に変わればまた表示される。

use leptos::prelude::*;

#[component]
pub fn LocationWarning<FR, FD>(visible: Memo<bool>, on_retry: FR, on_dismiss: FD) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    let guidance = guidance_for(&user_agent());

    view! {
        <Show when=move || visible.get()>
            <div class="location-warning" role="alert">
                <p class="warning-title">"📍 Konum izni kapalı"</p>
                <p>"Size en yakın nöbetçi eczaneyi gösterebilmemiz için konum izni gerekiyor."</p>
                <p class="warning-guidance">{guidance}</p>
                <div class="warning-actions">
                    <button
                        class="btn btn-primary btn-small"
                        on:click={
                            let on_retry = on_retry.clone();
                            move |_| on_retry(())
                        }
                    >
                        "Tekrar Dene"
                    </button>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_dismiss = on_dismiss.clone();
                            move |_| on_dismiss(())
                        }
                    >
                        "Kapat"
                    </button>
                </div>
            </div>
        </Show>
    }
}

fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// ブラウザごとの許可の戻し方
pub fn guidance_for(user_agent: &str) -> &'static str {
    let ua = user_agent.to_lowercase();
    if ua.contains("iphone") || ua.contains("ipad") {
        "Ayarlar > Gizlilik > Konum Servisleri > Safari Web Siteleri yolundan konuma izin verin."
    } else if ua.contains("android") {
        "Adres çubuğundaki kilit simgesine dokunun, İzinler > Konum seçeneğini açın."
    } else if ua.contains("firefox") {
        "Adres çubuğundaki konum simgesine tıklayıp engellemeyi kaldırın, ardından sayfayı yenileyin."
    } else if ua.contains("safari") && !ua.contains("chrome") {
        "Safari > Ayarlar > Web Siteleri > Konum bölümünden bu siteye izin verin."
    } else {
        "Adres çubuğundaki kilit simgesine tıklayın ve Konum iznini \"İzin ver\" olarak değiştirin."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_ios() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Safari/604.1";
        assert!(guidance_for(ua).starts_with("Ayarlar > Gizlilik"));
    }

    #[test]
    fn test_guidance_android_chrome() {
        let ua = "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
        assert!(guidance_for(ua).contains("İzinler > Konum"));
    }

    #[test]
    fn test_guidance_desktop_chrome() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
        assert!(guidance_for(ua).contains("İzin ver"));
    }

    #[test]
    fn test_guidance_desktop_safari() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";
        assert!(guidance_for(ua).starts_with("Safari > Ayarlar"));
    }
}
