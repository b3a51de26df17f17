// services/tile-dash/src/components/add_modal.rs
//
// Tile Dashboard - Add Tile Modal
//

use leptos::*;
use tilekit::types::{FINISHES, GRADES, STATUSES, TILE_TYPES};
use tilekit::TileDraft;
use crate::state::DashState;

/// Form field bound to one draft attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftField {
    EntryDate,
    Brand,
    Manufacturer,
    Grade,
    WorkingSize,
    Finish,
    TileType,
    Location,
    Status,
}

impl DraftField {
    fn get(self, draft: &TileDraft) -> String {
        match self {
            DraftField::EntryDate => draft.entry_date.clone(),
            DraftField::Brand => draft.brand.clone(),
            DraftField::Manufacturer => draft.manufacturer.clone(),
            DraftField::Grade => draft.grade.clone(),
            DraftField::WorkingSize => draft.working_size.clone(),
            DraftField::Finish => draft.finish.clone(),
            DraftField::TileType => draft.tile_type.clone(),
            DraftField::Location => draft.location.clone(),
            DraftField::Status => draft.status.clone(),
        }
    }

    fn set(self, draft: &mut TileDraft, value: String) {
        let slot = match self {
            DraftField::EntryDate => &mut draft.entry_date,
            DraftField::Brand => &mut draft.brand,
            DraftField::Manufacturer => &mut draft.manufacturer,
            DraftField::Grade => &mut draft.grade,
            DraftField::WorkingSize => &mut draft.working_size,
            DraftField::Finish => &mut draft.finish,
            DraftField::TileType => &mut draft.tile_type,
            DraftField::Location => &mut draft.location,
            DraftField::Status => &mut draft.status,
        };
        *slot = value;
    }
}

#[component]
pub fn AddTileModal(state: DashState) -> impl IntoView {
    let draft = state.draft;
    let submitting = move || state.submitting.get();
    let can_submit = move || draft.with(|d| d.is_complete()) && !submitting();

    let close = move |_: ev::MouseEvent| state.modal_open.set(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }

        spawn_local(async move {
            if let Err(err) = state.submit_draft().await {
                log::warn!("Create failed: {}", err);
            }
        });
    };

    view! {
        <Show when=move || state.modal_open.get()>
            <div class="modal-backdrop">
                <form class="modal" on:submit=on_submit>
                    <div class="modal-header">
                        <h2 class="panel-title">"Add New Tile Sample"</h2>
                        <button type="button" class="modal-close" on:click=close>"✕"</button>
                    </div>

                    <div class="form-grid">
                        <TextInput draft=draft field=DraftField::EntryDate label="Entry Date" input_type="date" />
                        <TextInput draft=draft field=DraftField::Brand label="Brand" input_type="text" />
                        <TextInput draft=draft field=DraftField::Manufacturer label="Manufacturer" input_type="text" />
                        <SelectInput draft=draft field=DraftField::Grade label="Grade" options={&GRADES} />
                        <TextInput draft=draft field=DraftField::WorkingSize label="Working Size" input_type="text" />
                        <SelectInput draft=draft field=DraftField::Finish label="GL/UGL" options={&FINISHES} />
                        <SelectInput draft=draft field=DraftField::TileType label="Type" options={&TILE_TYPES} />
                        <TextInput draft=draft field=DraftField::Location label="Storage Location" input_type="text" />
                        <SelectInput draft=draft field=DraftField::Status label="Status" options={&STATUSES} />
                    </div>

                    <p class="form-hint">
                        {move || missing_hint(&draft.with(|d| d.missing_fields()))}
                    </p>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=close>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                            {move || if submitting() { "Saving..." } else { "Save Tile" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn TextInput(
    draft: RwSignal<TileDraft>,
    field: DraftField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                class="form-input"
                prop:value=move || draft.with(|d| field.get(d))
                on:input=move |ev| draft.update(|d| field.set(d, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn SelectInput(
    draft: RwSignal<TileDraft>,
    field: DraftField,
    label: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                class="form-input"
                prop:value=move || draft.with(|d| field.get(d))
                on:change=move |ev| draft.update(|d| field.set(d, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option
                                value=option
                                selected=move || draft.with(|d| field.get(d) == option)
                            >
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Hint listing the required fields still empty
fn missing_hint(missing: &[&str]) -> String {
    if missing.is_empty() {
        String::new()
    } else {
        format!("Required: {}", missing.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_field_set_then_get() {
        let mut draft = TileDraft::default();
        DraftField::Location.set(&mut draft, "Rak B-02".to_string());
        DraftField::Finish.set(&mut draft, "UGL".to_string());

        assert_eq!(DraftField::Location.get(&draft), "Rak B-02");
        assert_eq!(draft.finish, "UGL");
        assert_eq!(DraftField::Grade.get(&draft), "BIa");
    }

    #[test]
    fn test_missing_hint() {
        assert_eq!(missing_hint(&[]), "");
        assert_eq!(
            missing_hint(&["brand", "storage location"]),
            "Required: brand, storage location"
        );
    }
}
