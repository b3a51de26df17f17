// services/tile-dash/src/app.rs
//
// Tile Dashboard - Main Application Component
//

use std::rc::Rc;

use leptos::*;
use tilekit::{HttpGateway, LoadPhase, TileGateway};
use crate::components::{
    AddTileModal,
    Charts,
    FilterControls,
    Header,
    StatsCards,
    StorageMap,
    TileTable,
    Toast,
};
use crate::config::{self, DataSource};
use crate::mock::DemoGateway;
use crate::state::{DashState, ViewMode};

const DEMO_RECORDS: usize = 36;
const DEMO_LATENCY_MS: u32 = 400;

#[component]
pub fn App() -> impl IntoView {
    let (dashboard_config, source) = config::resolve();

    let gateway: Rc<dyn TileGateway> = match source {
        DataSource::Sheet(gateway_config) => {
            log::info!("Reading tiles from {}", gateway_config.sheet_url);
            Rc::new(HttpGateway::new(gateway_config))
        }
        DataSource::Demo { reason } => {
            log::info!("Serving demo tiles ({})", reason);
            let seed = chrono::Utc::now().timestamp_millis() as u64;
            Rc::new(DemoGateway::seeded(DEMO_RECORDS, seed).with_latency(DEMO_LATENCY_MS))
        }
    };

    let state = DashState::new(gateway, dashboard_config);
    spawn_local(state.reload());

    view! {
        {move || match state.phase.get() {
            LoadPhase::Loading => view! { <LoadingScreen /> }.into_view(),
            LoadPhase::Failed(message) => view! { <ErrorScreen state=state message=message /> }.into_view(),
            LoadPhase::Ready => view! { <Dashboard state=state /> }.into_view(),
        }}
    }
}

#[component]
fn Dashboard(state: DashState) -> impl IntoView {
    view! {
        <div class="tile-app">
            <Header state=state />

            <main class="dashboard">
                <StatsCards state=state />
                <Charts state=state />

                <section class="panel records-panel">
                    <FilterControls state=state />
                    {move || match state.view_mode.get() {
                        ViewMode::Table => view! { <TileTable state=state /> }.into_view(),
                        ViewMode::StorageMap => view! { <StorageMap state=state /> }.into_view(),
                    }}
                </section>
            </main>

            <footer class="footer">
                <span class="footer-brand">"🧱 Tile Sample Storage"</span>
                <span class="footer-tagline">"Every sample on its shelf"</span>
            </footer>

            <AddTileModal state=state />
            <Toast state=state />
        </div>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="screen screen-loading">
            <div class="spinner"></div>
            <p>"Loading tile samples..."</p>
        </div>
    }
}

#[component]
fn ErrorScreen(state: DashState, message: String) -> impl IntoView {
    view! {
        <div class="screen screen-error">
            <h2>"Something went wrong"</h2>
            <p class="error-message">{message}</p>
            <button class="btn btn-primary" on:click=move |_| spawn_local(state.reload())>
                "Retry"
            </button>
        </div>
    }
}
