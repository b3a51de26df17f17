// services/tile-dash/src/lib.rs
//
// Tile Dashboard - Library exports
//

pub mod app;
pub mod components;
pub mod config;
pub mod mock;
pub mod state;
