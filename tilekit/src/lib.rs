//! Shared core of the tile sample inventory dashboard: record types, the
//! spreadsheet gateway, client-side query state and the mutation flows.

pub mod config;
pub mod errors;
pub mod gateway;
pub mod inventory;
pub mod query;
pub mod types;

pub use config::{DashboardConfig, GatewayConfig};
pub use errors::{ErrorClass, InventoryError};
pub use gateway::{HttpGateway, TileGateway};
pub use inventory::InventoryStore;
pub use query::QueryState;
pub use types::{LoadPhase, Notice, NoticeKind, SortDirection, SortField, TileDraft, TileRecord};
