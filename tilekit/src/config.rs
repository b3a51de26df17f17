use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::InventoryError;

/// Endpoints of the spreadsheet datastore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// CSV export of the inventory sheet (read side).
    pub sheet_url: String,
    /// Deployed web-app script accepting add/delete mutations.
    pub script_url: String,
}

impl GatewayConfig {
    pub fn new(sheet_url: impl Into<String>, script_url: impl Into<String>) -> Self {
        Self {
            sheet_url: sheet_url.into(),
            script_url: script_url.into(),
        }
    }

    /// Build from optional values, as supplied by build-time environment variables.
    pub fn from_parts(
        sheet_url: Option<&str>,
        script_url: Option<&str>,
    ) -> Result<Self, InventoryError> {
        let sheet_url = non_blank(sheet_url)
            .ok_or_else(|| InventoryError::Config("sheet URL is not set".to_string()))?;
        let script_url = non_blank(script_url)
            .ok_or_else(|| InventoryError::Config("script URL is not set".to_string()))?;

        let config = Self::new(sheet_url, script_url);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InventoryError> {
        parse_http_url("sheet URL", &self.sheet_url)?;
        parse_http_url("script URL", &self.script_url)?;
        Ok(())
    }
}

/// Presentation knobs shared by the dashboard views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub page_size: usize,
    pub notice_timeout_ms: u32,
    pub demo: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: crate::query::PAGE_SIZE,
            notice_timeout_ms: 3_000,
            demo: false,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_http_url(name: &str, value: &str) -> Result<Url, InventoryError> {
    let url = Url::parse(value)
        .map_err(|e| InventoryError::Config(format!("{} '{}' is invalid: {}", name, value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InventoryError::Config(format!(
            "{} must use http or https, got '{}'",
            name, other
        ))),
    }
}
