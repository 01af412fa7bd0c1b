//! サイドバー（検索・当番薬局リスト）

use eczane_common::PharmacyRecord;
use leptos::prelude::*;

#[component]
pub fn Sidebar<FS, FP, FR>(
    visible: Memo<Vec<PharmacyRecord>>,
    query: Memo<String>,
    loading: Memo<bool>,
    open: Memo<bool>,
    selected_name: Memo<Option<String>>,
    on_search: FS,
    on_select: FP,
    on_reload: FR,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FP: Fn(PharmacyRecord) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <aside class="sidebar" class:collapsed=move || !open.get()>
            <div class="sidebar-header">
                <h1>"İzmir Eczane"</h1>
                <p class="subtitle">"Nöbetçi Listesi"</p>

                <div class="search-box">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="text"
                        placeholder="İlçe veya eczane ara..."
                        prop:value=move || query.get()
                        on:input=move |ev| on_search(event_target_value(&ev))
                    />
                </div>

                <button
                    class="btn btn-secondary btn-small"
                    disabled=move || loading.get()
                    on:click=move |_| on_reload(())
                >
                    "Yenile"
                </button>
            </div>

            <div class="pharmacy-list">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"Yükleniyor..."</div> }
                >
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <p class="text-muted">"Eczane bulunamadı"</p>
                    </Show>
                    <For
                        each=move || visible.get()
                        key=|record| format!("{}-{}", record.name, record.location_x)
                        children={
                            let on_select = on_select.clone();
                            move |record| {
                                view! {
                                    <PharmacyCard
                                        record=record
                                        selected_name=selected_name
                                        on_select=on_select.clone()
                                    />
                                }
                            }
                        }
                    />
                </Show>
            </div>
        </aside>
    }
}

#[component]
fn PharmacyCard<FP>(
    record: PharmacyRecord,
    selected_name: Memo<Option<String>>,
    on_select: FP,
) -> impl IntoView
where
    FP: Fn(PharmacyRecord) + 'static + Clone + Send + Sync,
{
    let is_selected = {
        let name = record.name.clone();
        move || selected_name.with(|s| s.as_deref() == Some(name.as_str()))
    };

    view! {
        <div
            class="pharmacy-card"
            class:selected=is_selected
            on:click={
                let record = record.clone();
                move |_| on_select(record.clone())
            }
        >
            <h3>{record.name.clone()}</h3>
            <p class="address">{record.address.clone()}</p>
            <div class="card-footer">
                <span class="district-badge">{record.district.clone()}</span>
                <span class="phone">{record.phone.clone()}</span>
            </div>
        </div>
    }
}
