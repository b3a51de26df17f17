// services/tile-dash/src/components/filter.rs
//
// Tile Dashboard - Search, Filter and View Controls
//

use leptos::*;
use crate::state::{DashState, ViewMode};

#[component]
pub fn FilterControls(state: DashState) -> impl IntoView {
    // Options come from the full list so a narrow filter never hides its own choices
    let options = create_memo(move |_| state.query.with(|q| q.filter_options()));
    let search = move || state.query.with(|q| q.criteria().search.clone());
    let grade = move || state.query.with(|q| q.criteria().grade.clone().unwrap_or_default());
    let status = move || state.query.with(|q| q.criteria().status.clone().unwrap_or_default());

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="filter-search"
                placeholder="Search brand, manufacturer or location..."
                prop:value=search
                on:input=move |ev| state.set_search(event_target_value(&ev))
            />

            <select
                class="filter-select"
                prop:value=grade
                on:change=move |ev| state.set_grade(event_target_value(&ev))
            >
                <option value="">"All Grades"</option>
                {move || options.with(|o| option_list(&o.grades, &grade()))}
            </select>

            <select
                class="filter-select"
                prop:value=status
                on:change=move |ev| state.set_status(event_target_value(&ev))
            >
                <option value="">"All Statuses"</option>
                {move || options.with(|o| option_list(&o.statuses, &status()))}
            </select>

            <div class="view-tabs">
                <ViewTab state=state mode=ViewMode::Table label="Table" />
                <ViewTab state=state mode=ViewMode::StorageMap label="Storage Map" />
            </div>

            <button class="btn btn-primary" on:click=move |_| state.modal_open.set(true)>
                "+ Add New Tile"
            </button>
        </div>
    }
}

#[component]
fn ViewTab(state: DashState, mode: ViewMode, label: &'static str) -> impl IntoView {
    let class = move || {
        if state.view_mode.get() == mode {
            "view-tab active"
        } else {
            "view-tab"
        }
    };

    view! {
        <button class=class on:click=move |_| state.view_mode.set(mode)>
            {label}
        </button>
    }
}

fn option_list(values: &[String], selected: &str) -> View {
    values
        .iter()
        .map(|value| {
            view! {
                <option value=value.clone() selected={value == selected}>
                    {value.clone()}
                </option>
            }
        })
        .collect_view()
}
