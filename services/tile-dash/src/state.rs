// services/tile-dash/src/state.rs
//
// Tile Dashboard - Reactive State Management
//

use std::rc::Rc;

use leptos::*;
use tilekit::inventory::{self, InventoryStore};
use tilekit::{
    DashboardConfig, InventoryError, LoadPhase, Notice, QueryState, TileDraft, TileGateway,
    TileRecord,
};

/// Which records panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    StorageMap,
}

/// Notification currently on screen; `id` lets a stale timer know it is stale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Main application state
/// All fields are signals or stored values, so DashState is Copy
#[derive(Clone, Copy)]
pub struct DashState {
    // Records plus search/filter/sort/page
    pub query: RwSignal<QueryState>,

    // Initial load status
    pub phase: RwSignal<LoadPhase>,

    // Create request outstanding
    pub submitting: RwSignal<bool>,

    pub notice: RwSignal<Option<ActiveNotice>>,
    notice_seq: StoredValue<u64>,

    pub modal_open: RwSignal<bool>,
    // Add form contents, kept while the modal is closed
    pub draft: RwSignal<TileDraft>,
    pub view_mode: RwSignal<ViewMode>,

    pub gateway: StoredValue<Rc<dyn TileGateway>>,
    pub config: StoredValue<DashboardConfig>,
}

impl DashState {
    pub fn new(gateway: Rc<dyn TileGateway>, config: DashboardConfig) -> Self {
        Self {
            query: create_rw_signal(QueryState::default().with_page_size(config.page_size)),
            phase: create_rw_signal(LoadPhase::Loading),
            submitting: create_rw_signal(false),
            notice: create_rw_signal(None),
            notice_seq: store_value(0),
            modal_open: create_rw_signal(false),
            draft: create_rw_signal(TileDraft::default()),
            view_mode: create_rw_signal(ViewMode::Table),
            gateway: store_value(gateway),
            config: store_value(config),
        }
    }

    pub fn gateway_name(&self) -> String {
        self.gateway.with_value(|g| g.name().to_string())
    }

    pub fn is_demo(&self) -> bool {
        self.config.with_value(|c| c.demo)
    }

    /// Fetch everything and replace the list
    pub async fn reload(self) {
        let gateway = self.gateway.get_value();
        if let Err(err) = inventory::load(gateway.as_ref(), &self).await {
            log::error!("Initial load failed: {}", err);
        }
    }

    pub async fn create(self, draft: TileDraft) -> Result<TileRecord, InventoryError> {
        let gateway = self.gateway.get_value();
        let result = inventory::create(gateway.as_ref(), &self, draft).await;
        if result.is_ok() {
            self.modal_open.set(false);
        }
        result
    }

    /// Save the form's draft; a saved draft resets the form
    pub async fn submit_draft(self) -> Result<TileRecord, InventoryError> {
        let record = self.create(self.draft.get_untracked()).await?;
        self.draft.set(TileDraft::default());
        Ok(record)
    }

    pub async fn delete(self, record: TileRecord) -> Result<(), InventoryError> {
        let gateway = self.gateway.get_value();
        inventory::delete(gateway.as_ref(), &self, record).await
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.notice.update(|current| {
            if current.as_ref().map(|n| n.id) == Some(id) {
                *current = None;
            }
        });
    }

    pub fn set_search(&self, value: String) {
        self.query.update(|q| q.set_search(value));
    }

    pub fn set_grade(&self, value: String) {
        self.query.update(|q| q.set_grade(value));
    }

    pub fn set_status(&self, value: String) {
        self.query.update(|q| q.set_status(value));
    }
}

impl InventoryStore for DashState {
    fn records(&self) -> Vec<TileRecord> {
        self.query.with_untracked(|q| q.records().to_vec())
    }

    fn replace_records(&self, records: Vec<TileRecord>) {
        self.query.update(|q| q.replace_records(records));
    }

    fn set_phase(&self, phase: LoadPhase) {
        self.phase.set(phase);
    }

    fn is_submitting(&self) -> bool {
        self.submitting.get_untracked()
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn notify(&self, notice: Notice) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.notice.set(Some(ActiveNotice { id, notice }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::DemoGateway;
    use tilekit::NoticeKind;

    fn draft() -> TileDraft {
        TileDraft {
            brand: "Granito".to_string(),
            manufacturer: "PT Granitoguna".to_string(),
            working_size: "60x120 cm".to_string(),
            location: "Rak D-04".to_string(),
            ..TileDraft::default()
        }
    }

    #[tokio::test]
    async fn test_reload_then_create_updates_signals() {
        let runtime = create_runtime();
        let gateway = Rc::new(DemoGateway::seeded(23, 7));
        let state = DashState::new(gateway, DashboardConfig::default());

        state.reload().await;
        assert_eq!(state.phase.get_untracked(), LoadPhase::Ready);
        assert_eq!(state.query.with_untracked(|q| q.total_pages()), 3);

        state.modal_open.set(true);
        let created = state.create(draft()).await.unwrap();

        let head = state.query.with_untracked(|q| q.records()[0].clone());
        assert_eq!(head.id, created.id);
        assert_eq!(state.query.with_untracked(|q| q.metrics().total), 24);
        assert!(!state.modal_open.get_untracked());
        let notice = state.notice.get_untracked().unwrap();
        assert_eq!(notice.notice.kind, NoticeKind::Success);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_submit_draft_resets_form_and_closes_modal() {
        let runtime = create_runtime();
        let state = DashState::new(Rc::new(DemoGateway::seeded(4, 2)), DashboardConfig::default());
        state.reload().await;

        state.modal_open.set(true);
        state.draft.set(draft());
        let created = state.submit_draft().await.unwrap();

        assert_eq!(created.brand, "Granito");
        assert!(!state.modal_open.get_untracked());
        assert!(state.draft.with_untracked(|d| d.brand.is_empty() && d.location.is_empty()));
        assert!(!state.submitting.get_untracked());
        assert_eq!(state.records().len(), 5);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_open_and_filled() {
        let runtime = create_runtime();
        let gateway = Rc::new(DemoGateway::seeded(4, 2).with_failure_rate(1.0));
        let state = DashState::new(gateway, DashboardConfig::default());
        state.reload().await;

        state.modal_open.set(true);
        state.draft.set(draft());
        assert!(state.submit_draft().await.is_err());

        assert!(state.modal_open.get_untracked());
        assert_eq!(state.draft.get_untracked(), draft());
        assert_eq!(state.records().len(), 4);
        let notice = state.notice.get_untracked().unwrap();
        assert_eq!(notice.notice.kind, NoticeKind::Error);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_stale_notice_timer_keeps_newer_notice() {
        let runtime = create_runtime();
        let state = DashState::new(Rc::new(DemoGateway::seeded(0, 1)), DashboardConfig::default());

        state.notify(Notice::success("first"));
        let first = state.notice.get_untracked().unwrap().id;
        state.notify(Notice::error("second"));

        state.dismiss_notice(first);
        assert_eq!(
            state.notice.get_untracked().map(|n| n.notice.message),
            Some("second".to_string())
        );

        let second = state.notice.get_untracked().unwrap().id;
        state.dismiss_notice(second);
        assert!(state.notice.get_untracked().is_none());

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_failed_delete_restores_record() {
        let runtime = create_runtime();
        let gateway = Rc::new(DemoGateway::seeded(5, 3).with_failure_rate(1.0));
        let state = DashState::new(gateway, DashboardConfig::default());
        state.reload().await;

        let victim = state.records()[2].clone();
        assert!(state.delete(victim.clone()).await.is_err());

        assert_eq!(state.records().len(), 5);
        assert!(state.records().iter().any(|r| r.id == victim.id));
        let notice = state.notice.get_untracked().unwrap();
        assert_eq!(notice.notice.kind, NoticeKind::Error);

        runtime.dispose();
    }
}
