//! 一時通知（トースト）

use eczane_common::{Notification, NotificationKind};
use leptos::prelude::*;

#[component]
pub fn Toast<FD>(notification: Memo<Option<Notification>>, on_dismiss: FD) -> impl IntoView
where
    FD: Fn(u64) + 'static + Clone + Send + Sync,
{
    move || {
        notification.get().map(|n| {
            let on_dismiss = on_dismiss.clone();
            let class = match n.kind {
                NotificationKind::Success => "toast toast-success",
                NotificationKind::Error => "toast toast-error",
            };
            let id = n.id;
            view! {
                <div class=class role="status">
                    <span>{n.message}</span>
                    <button class="btn-close" on:click=move |_| on_dismiss(id)>"✕"</button>
                </div>
            }
        })
    }
}
