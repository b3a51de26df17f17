// services/tile-dash/src/config.rs
//
// Tile Dashboard - Endpoint resolution
// Endpoints are baked in at build time: TILE_SHEET_URL / TILE_SCRIPT_URL
//

use tilekit::{DashboardConfig, GatewayConfig};

/// Where the dashboard reads and writes records.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Sheet(GatewayConfig),
    Demo { reason: String },
}

impl DataSource {
    pub fn is_demo(&self) -> bool {
        matches!(self, DataSource::Demo { .. })
    }
}

/// Resolve from the build environment and the page's query string.
pub fn resolve() -> (DashboardConfig, DataSource) {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    resolve_from(
        option_env!("TILE_SHEET_URL"),
        option_env!("TILE_SCRIPT_URL"),
        &query,
    )
}

pub fn resolve_from(
    sheet_url: Option<&str>,
    script_url: Option<&str>,
    query: &str,
) -> (DashboardConfig, DataSource) {
    let demo_requested = query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "demo" || pair.starts_with("demo="));

    let source = if demo_requested {
        DataSource::Demo {
            reason: "demo mode requested".to_string(),
        }
    } else {
        match GatewayConfig::from_parts(sheet_url, script_url) {
            Ok(config) => DataSource::Sheet(config),
            Err(err) => {
                log::warn!("Falling back to demo data: {}", err);
                DataSource::Demo {
                    reason: err.to_string(),
                }
            }
        }
    };

    let config = DashboardConfig {
        demo: source.is_demo(),
        ..DashboardConfig::default()
    };

    (config, source)
}
