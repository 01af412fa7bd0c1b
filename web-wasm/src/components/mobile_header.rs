//! モバイル用ヘッダー（検索欄と件数）

use leptos::prelude::*;

#[component]
pub fn MobileHeader<FS, FT>(
    count: Signal<usize>,
    query: Memo<String>,
    on_search: FS,
    on_toggle_sidebar: FT,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
{
    view! {
        <div class="mobile-header">
            <button class="btn btn-tertiary btn-small" on:click=move |_| on_toggle_sidebar(())>
                "☰"
            </button>
            <input
                type="text"
                placeholder="Eczane ara..."
                prop:value=move || query.get()
                on:input=move |ev| on_search(event_target_value(&ev))
            />
            <span class="count-badge">{move || count.get()}</span>
        </div>
    }
}
