use thiserror::Error;

/// Generic text shown when the sheet body cannot be turned into records.
pub const PARSE_FAILURE_MESSAGE: &str = "Could not load or process the inventory data.";

/// Fallback when the mutation script fails without saying why.
pub const REMOTE_FALLBACK_MESSAGE: &str = "the mutation script reported an error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Failed to fetch inventory sheet ({0}). Check TILE_SHEET_URL and that the sheet is shared or published to the web."
    )]
    Fetch(String),

    #[error(
        "Could not reach the mutation script ({0}). Check the web app URL and that its access is set to \"Anyone\"."
    )]
    Network(String),

    #[error("Mutation script error: {0}")]
    Remote(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A submission is already in progress")]
    Busy,
}

/// Coarse failure class; `user_message` picks its wording from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Transport,
    RemoteApplication,
    Parse,
    Local,
}

impl InventoryError {
    pub fn class(&self) -> ErrorClass {
        match self {
            InventoryError::Fetch(_) | InventoryError::Network(_) => ErrorClass::Transport,
            InventoryError::Remote(_) => ErrorClass::RemoteApplication,
            InventoryError::Parse(_) => ErrorClass::Parse,
            InventoryError::Config(_) | InventoryError::Validation(_) | InventoryError::Busy => {
                ErrorClass::Local
            }
        }
    }

    /// Text for notifications and the error screen. Parse details stay in the logs.
    pub fn user_message(&self) -> String {
        match (self.class(), self) {
            (ErrorClass::Parse, _) => PARSE_FAILURE_MESSAGE.to_string(),
            (ErrorClass::RemoteApplication, InventoryError::Remote(message)) => message.clone(),
            // Transport texts carry their own endpoint guidance
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(InventoryError::Fetch("x".into()).class(), ErrorClass::Transport);
        assert_eq!(InventoryError::Network("x".into()).class(), ErrorClass::Transport);
        assert_eq!(
            InventoryError::Remote("x".into()).class(),
            ErrorClass::RemoteApplication
        );
        assert_eq!(InventoryError::Parse("x".into()).class(), ErrorClass::Parse);
        assert_eq!(InventoryError::Busy.class(), ErrorClass::Local);
    }

    #[test]
    fn test_user_messages() {
        let parse = InventoryError::Parse("unexpected token at line 3".into());
        assert_eq!(parse.user_message(), PARSE_FAILURE_MESSAGE);

        let remote = InventoryError::Remote("Sheet is locked".into());
        assert_eq!(remote.user_message(), "Sheet is locked");

        let network = InventoryError::Network("error sending request".into());
        assert!(network.user_message().contains("\"Anyone\""));

        let fetch = InventoryError::Fetch("HTTP 404 Not Found".into());
        let message = fetch.user_message();
        assert!(message.contains("HTTP 404 Not Found"));
        assert!(message.contains("TILE_SHEET_URL"));
        assert!(message.contains("shared or published"));
    }

    #[test]
    fn test_every_transport_error_points_at_endpoints() {
        let transport = [
            InventoryError::Fetch("error sending request".into()),
            InventoryError::Network("HTTP 500 - boom".into()),
        ];
        for err in transport {
            assert_eq!(err.class(), ErrorClass::Transport);
            let message = err.user_message();
            assert!(message.contains("URL"), "{}", message);
        }
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: InventoryError = err.into();
        assert_eq!(err.class(), ErrorClass::Parse);
    }
}
