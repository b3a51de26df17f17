// services/tile-dash/src/components/mod.rs
//
// Tile Dashboard - UI Components
//

mod add_modal;
mod charts;
mod filter;
mod header;
mod stats;
mod storage_map;
mod table;
mod toast;

pub use add_modal::AddTileModal;
pub use charts::Charts;
pub use filter::FilterControls;
pub use header::Header;
pub use stats::StatsCards;
pub use storage_map::StorageMap;
pub use table::TileTable;
pub use toast::Toast;
