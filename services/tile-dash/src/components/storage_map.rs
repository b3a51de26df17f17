// services/tile-dash/src/components/storage_map.rs
//
// Tile Dashboard - Storage Map Component
// One card per storage location, over the filtered records
//

use leptos::*;
use tilekit::TileRecord;
use crate::state::DashState;

#[component]
pub fn StorageMap(state: DashState) -> impl IntoView {
    let groups = create_memo(move |_| {
        state
            .query
            .with(|q| q.storage_map().into_iter().collect::<Vec<_>>())
    });

    view! {
        <div class="storage-map">
            <Show
                when=move || groups.with(|g| !g.is_empty())
                fallback=|| view! { <p class="table-empty">"No tile samples to place on the map."</p> }
            >
                <div class="location-grid">
                    {move || {
                        groups
                            .get()
                            .into_iter()
                            .map(|(location, tiles)| view! { <LocationCard location=location tiles=tiles /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn LocationCard(location: String, tiles: Vec<TileRecord>) -> impl IntoView {
    let count = tiles.len();

    view! {
        <div class="location-card">
            <div class="location-header">
                <span class="location-name">{location}</span>
                <span class="location-count">{item_count_label(count)}</span>
            </div>
            <ul class="location-items">
                {tiles
                    .into_iter()
                    .map(|tile| {
                        let class = if tile.is_active() {
                            "location-item item-active"
                        } else {
                            "location-item"
                        };
                        view! {
                            <li class=class>
                                <span class="item-brand">{tile.brand}</span>
                                <span class="item-size">{tile.working_size}</span>
                                <span class="item-grade">{tile.grade}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}
