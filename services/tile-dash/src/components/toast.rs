// services/tile-dash/src/components/toast.rs
//
// Tile Dashboard - Notification Toast
//

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use tilekit::NoticeKind;
use crate::state::DashState;

#[component]
pub fn Toast(state: DashState) -> impl IntoView {
    let timeout_ms = state.config.with_value(|c| c.notice_timeout_ms);

    // Each notice gets its own timer; a stale timer finds a newer id and does nothing
    create_effect(move |_| {
        if let Some(id) = state.notice.with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                state.dismiss_notice(id);
            });
        }
    });

    view! {
        {move || {
            state.notice.get().map(|active| {
                let id = active.id;
                let (class, icon) = match active.notice.kind {
                    NoticeKind::Success => ("toast toast-success", "✓"),
                    NoticeKind::Error => ("toast toast-error", "✗"),
                };
                view! {
                    <div class=class role="status">
                        <span class="toast-icon">{icon}</span>
                        <span class="toast-message">{active.notice.message}</span>
                        <button class="toast-close" on:click=move |_| state.dismiss_notice(id)>
                            "✕"
                        </button>
                    </div>
                }
            })
        }}
    }
}
