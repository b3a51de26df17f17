//! Request/response envelope of the mutation script.

use serde::{Deserialize, Serialize};

use crate::errors::{InventoryError, REMOTE_FALLBACK_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAction {
    Add,
    Delete,
}

/// Record fields flattened next to the `action` discriminator.
#[derive(Debug, Serialize)]
pub struct ScriptRequest<'a, T: Serialize> {
    #[serde(flatten)]
    pub payload: &'a T,
    pub action: ScriptAction,
}

impl<'a, T: Serialize> ScriptRequest<'a, T> {
    pub fn new(payload: &'a T, action: ScriptAction) -> Self {
        Self { payload, action }
    }

    pub fn to_body(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ScriptResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }

    /// Decode the body and turn an application-level failure into an error.
    pub fn interpret(body: &str) -> Result<(), InventoryError> {
        let response: ScriptResponse = serde_json::from_str(body.trim())?;
        if response.is_success() {
            return Ok(());
        }

        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| REMOTE_FALLBACK_MESSAGE.to_string());
        Err(InventoryError::Remote(message))
    }
}
