// services/tile-dash/src/components/header.rs
//
// Tile Dashboard - Header Component
//

use leptos::*;
use crate::state::DashState;

#[component]
pub fn Header(state: DashState) -> impl IntoView {
    let source = state.gateway_name();
    let (source_class, source_text) = if state.is_demo() {
        ("source-badge source-demo", "● Demo data")
    } else {
        ("source-badge source-live", "● Live sheet")
    };

    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"🧱"</span>
                <h1 class="header-title">"Tile Sample Storage"</h1>
                <span class="header-subtitle">"Ceramic sample inventory dashboard"</span>
            </div>

            <div class="header-actions">
                <span class=source_class title=format!("Gateway: {}", source)>
                    {source_text}
                </span>
            </div>
        </header>
    }
}
