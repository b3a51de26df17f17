//! Load, create and delete flows with optimistic updates.
//!
//! The flows only talk to an [`InventoryStore`], so the same code drives the
//! reactive dashboard state and plain in-memory stores.

use tracing::{info, warn};

use crate::errors::InventoryError;
use crate::gateway::TileGateway;
use crate::types::{LoadPhase, Notice, TileDraft, TileRecord};

pub const CREATE_SUCCESS_MESSAGE: &str = "Tile record saved.";
pub const DELETE_SUCCESS_MESSAGE: &str = "Tile record deleted.";

/// Holder of the record list and the transient flags the flows touch.
///
/// Methods take `&self`; implementations use interior mutability and must not
/// hold borrows across calls.
pub trait InventoryStore {
    fn records(&self) -> Vec<TileRecord>;
    fn replace_records(&self, records: Vec<TileRecord>);
    fn set_phase(&self, phase: LoadPhase);
    fn is_submitting(&self) -> bool;
    fn set_submitting(&self, submitting: bool);
    fn notify(&self, notice: Notice);
}

/// Full (re)load. Drives the phase shown by the loading and error screens.
pub async fn load<G, S>(gateway: &G, store: &S) -> Result<usize, InventoryError>
where
    G: TileGateway + ?Sized,
    S: InventoryStore,
{
    store.set_phase(LoadPhase::Loading);
    match gateway.fetch_all().await {
        Ok(records) => {
            let count = records.len();
            store.replace_records(records);
            store.set_phase(LoadPhase::Ready);
            info!("Inventory loaded from {}: {} records", gateway.name(), count);
            Ok(count)
        }
        Err(err) => {
            warn!("Inventory load failed: {}", err);
            store.set_phase(LoadPhase::Failed(err.user_message()));
            Err(err)
        }
    }
}

/// Replace the list with the remote state without touching the phase.
pub async fn resync<G, S>(gateway: &G, store: &S) -> Result<usize, InventoryError>
where
    G: TileGateway + ?Sized,
    S: InventoryStore,
{
    let records = gateway.fetch_all().await?;
    let count = records.len();
    store.replace_records(records);
    Ok(count)
}

/// Submit a new record and prepend it once the script accepts it.
pub async fn create<G, S>(gateway: &G, store: &S, draft: TileDraft) -> Result<TileRecord, InventoryError>
where
    G: TileGateway + ?Sized,
    S: InventoryStore,
{
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(InventoryError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }
    if store.is_submitting() {
        return Err(InventoryError::Busy);
    }

    store.set_submitting(true);
    let result = gateway.create(draft).await;
    store.set_submitting(false);

    match result {
        Ok(record) => {
            let mut records = store.records();
            records.insert(0, record.clone());
            store.replace_records(records);
            store.notify(Notice::success(CREATE_SUCCESS_MESSAGE));
            Ok(record)
        }
        Err(err) => {
            warn!("Create failed: {}", err);
            store.notify(Notice::error(err.user_message()));
            Err(err)
        }
    }
}

/// Remove the record right away, then confirm with the script. A failed
/// delete is rolled back by reloading everything rather than reinserting.
pub async fn delete<G, S>(gateway: &G, store: &S, record: TileRecord) -> Result<(), InventoryError>
where
    G: TileGateway + ?Sized,
    S: InventoryStore,
{
    let remaining: Vec<TileRecord> = store
        .records()
        .into_iter()
        .filter(|r| r.id != record.id)
        .collect();
    store.replace_records(remaining);

    match gateway.delete(&record).await {
        Ok(()) => {
            store.notify(Notice::success(DELETE_SUCCESS_MESSAGE));
            Ok(())
        }
        Err(err) => {
            warn!("Delete of {} failed, resynchronising: {}", record.id, err);
            if let Err(resync_err) = resync(gateway, store).await {
                warn!("Resync after failed delete also failed: {}", resync_err);
            }
            store.notify(Notice::error(err.user_message()));
            Err(err)
        }
    }
}

/// Text of the confirmation asked before a delete is dispatched.
pub fn delete_prompt(record: &TileRecord) -> String {
    format!(
        "Delete the \"{}\" tile stored at \"{}\"?",
        record.brand, record.location
    )
}
