mod http;
pub mod script;
pub mod sheet;

pub use http::HttpGateway;
pub use script::{ScriptAction, ScriptResponse};
pub use sheet::parse_sheet;

use async_trait::async_trait;

use crate::errors::InventoryError;
use crate::types::{TileDraft, TileRecord};

/// Integration boundary to the spreadsheet-backed datastore.
///
/// Futures are not `Send`: the browser runs everything on one event loop.
/// Implementations make no promise about atomicity or ordering between calls.
#[async_trait(?Send)]
pub trait TileGateway {
    /// Read the whole inventory. Any failure fails the whole load.
    async fn fetch_all(&self) -> Result<Vec<TileRecord>, InventoryError>;

    /// Submit a new record; returns it with a freshly generated id.
    async fn create(&self, draft: TileDraft) -> Result<TileRecord, InventoryError>;

    async fn delete(&self, record: &TileRecord) -> Result<(), InventoryError>;

    /// Short label for logs and the header badge.
    fn name(&self) -> &str;
}
