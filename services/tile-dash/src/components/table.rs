// services/tile-dash/src/components/table.rs
//
// Tile Dashboard - Sortable, Paginated Records Table
//

use leptos::*;
use tilekit::inventory::delete_prompt;
use tilekit::{SortDirection, SortField, TileRecord};
use crate::state::DashState;

#[component]
pub fn TileTable(state: DashState) -> impl IntoView {
    let page = create_memo(move |_| state.query.with(|q| q.current_page()));
    let is_empty = move || page.with(|p| p.records.is_empty());

    view! {
        <div class="records-table">
            <table class="tile-table">
                <thead>
                    <tr>
                        {SortField::TABLE_COLUMNS
                            .into_iter()
                            .map(|field| view! { <SortHeader state=state field=field /> })
                            .collect_view()}
                        <th class="col-actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || page.get().records
                        key=|tile| tile.id.clone()
                        children=move |tile| view! { <TileRow state=state tile=tile /> }
                    />
                </tbody>
            </table>

            <Show when=is_empty>
                <p class="table-empty">"No tile samples match the current filters."</p>
            </Show>

            <Pager state=state />
        </div>
    }
}

#[component]
fn SortHeader(state: DashState, field: SortField) -> impl IntoView {
    let indicator = move || {
        state
            .query
            .with(|q| sort_indicator(q.sort_direction_of(field)))
    };

    view! {
        <th
            class="sortable"
            on:click=move |_| state.query.update(|q| q.toggle_sort(field))
        >
            {field.label()}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}

#[component]
fn TileRow(state: DashState, tile: TileRecord) -> impl IntoView {
    let status_class = if tile.is_active() {
        "status-pill status-active"
    } else {
        "status-pill status-inactive"
    };

    let cells = SortField::TABLE_COLUMNS
        .into_iter()
        .filter(|field| *field != SortField::Status)
        .map(|field| view! { <td>{field.value(&tile).to_string()}</td> })
        .collect_view();

    let status = tile.status.clone();
    let on_delete = move |_: ev::MouseEvent| confirm_and_delete(state, tile.clone());

    view! {
        <tr>
            {cells}
            <td><span class=status_class>{status}</span></td>
            <td class="col-actions">
                <button class="btn btn-danger btn-small" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn Pager(state: DashState) -> impl IntoView {
    let position = move || state.query.with(|q| (q.page(), q.total_pages()));
    let range = move || {
        state
            .query
            .with(|q| range_label(q.page(), q.page_size(), q.filtered().len()))
    };

    view! {
        <Show when=move || { show_pager(position().1) }>
            <div class="pager">
                <span class="pager-range">{range}</span>
                <button
                    class="btn btn-secondary"
                    disabled=move || { position().0 <= 1 }
                    on:click=move |_| {
                        state.query.update(|q| {
                            q.previous_page();
                        })
                    }
                >
                    "Prev"
                </button>
                <span class="pager-status">
                    {move || {
                        let (page, total) = position();
                        format!("Page {} of {}", page, total)
                    }}
                </span>
                <button
                    class="btn btn-secondary"
                    disabled=move || { let (page, total) = position(); page >= total }
                    on:click=move |_| {
                        state.query.update(|q| {
                            q.next_page();
                        })
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}

fn confirm_and_delete(state: DashState, tile: TileRecord) {
    let confirmed = window()
        .confirm_with_message(&delete_prompt(&tile))
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    spawn_local(async move {
        if let Err(err) = state.delete(tile).await {
            log::warn!("Delete failed: {}", err);
        }
    });
}

/// The pager only appears once there is somewhere to page to
fn show_pager(total_pages: usize) -> bool {
    total_pages > 1
}

/// "Showing 11-20 of 23" for the given one-based page
fn range_label(page: usize, page_size: usize, matching: usize) -> String {
    if matching == 0 {
        return "Showing 0 of 0".to_string();
    }
    let first = page.saturating_sub(1) * page_size + 1;
    let last = (page * page_size).min(matching);
    format!("Showing {}-{} of {}", first, last, matching)
}

/// Header arrow for a column's sort state
fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "↕",
    }
}
