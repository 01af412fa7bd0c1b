//! 選択中の薬局の詳細パネル（電話・経路）

use eczane_common::{call_uri, directions_uri, format_duty_date, PharmacyRecord};
use leptos::prelude::*;

#[component]
pub fn DetailPanel<FD>(selected: Memo<Option<PharmacyRecord>>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        selected.get().map(|record| {
            let on_dismiss = on_dismiss.clone();
            let note = record.district_note().map(str::to_string);
            view! {
                <div class="detail-panel">
                    <div class="detail-header">
                        <div>
                            <h2>{record.name.clone()}</h2>
                            <p class="address">{record.address.clone()}</p>
                        </div>
                        <button class="btn-close" on:click=move |_| on_dismiss(())>"✕"</button>
                    </div>

                    <div class="detail-meta">
                        <span>{format!("📅 {}", format_duty_date(&record.duty_date))}</span>
                        <span class="district-badge">{record.district.clone()}</span>
                    </div>
                    {note.map(|n| view! { <div class="district-note">{n}</div> })}

                    <div class="detail-actions">
                        <a href=call_uri(&record) class="btn btn-primary">"Ara"</a>
                        <a
                            href=directions_uri(&record)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-secondary"
                        >
                            "Yol Tarifi"
                        </a>
                    </div>
                </div>
            }
        })
    }
}
