use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::script::{ScriptAction, ScriptRequest, ScriptResponse};
use super::sheet::parse_body;
use super::TileGateway;
use crate::config::GatewayConfig;
use crate::errors::InventoryError;
use crate::types::{TileDraft, TileRecord};

/// Plain text keeps the browser from sending a CORS preflight to the script.
const SCRIPT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Gateway talking to the sheet export and the mutation script over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    async fn send_to_script<T: Serialize>(
        &self,
        payload: &T,
        action: ScriptAction,
    ) -> Result<(), InventoryError> {
        let body = ScriptRequest::new(payload, action).to_body()?;

        let response = self
            .client
            .post(&self.config.script_url)
            .header(CONTENT_TYPE, SCRIPT_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Mutation script unreachable: {}", e);
                InventoryError::Network(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| InventoryError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Mutation script answered HTTP {}", status);
            return Err(InventoryError::Network(format!("HTTP {} - {}", status, text.trim())));
        }

        ScriptResponse::interpret(&text)
    }
}

#[async_trait(?Send)]
impl TileGateway for HttpGateway {
    async fn fetch_all(&self) -> Result<Vec<TileRecord>, InventoryError> {
        debug!("Fetching inventory sheet from {}", self.config.sheet_url);

        let response = self
            .client
            .get(&self.config.sheet_url)
            .send()
            .await
            .map_err(|e| InventoryError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryError::Fetch(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InventoryError::Fetch(e.to_string()))?;

        let records = parse_body(&body)?;
        info!("Loaded {} tile records", records.len());
        Ok(records)
    }

    async fn create(&self, draft: TileDraft) -> Result<TileRecord, InventoryError> {
        self.send_to_script(&draft, ScriptAction::Add).await?;
        let record = TileRecord::from_draft(draft);
        info!("Created tile record {} ({})", record.id, record.brand);
        Ok(record)
    }

    async fn delete(&self, record: &TileRecord) -> Result<(), InventoryError> {
        self.send_to_script(record, ScriptAction::Delete).await?;
        info!("Deleted tile record {} ({})", record.id, record.brand);
        Ok(())
    }

    fn name(&self) -> &str {
        "sheet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const SHEET: &str = "\"Tanggal Masuk\",\"Merek\",\"Perusahaan\",\"Grade\",\"Working Size\",\"GL/UGL\",\"Tipe\",\"Lokasi Sampel\",\"Status\"\n\
\"2024-01-05\",\"Roman\",\"PT Roman Ceramic\",\"BIa\",\"60x60 cm\",\"GL\",\"Rectified\",\"Rak A-01\",\"Sampel Aktif\"\n\
\"2024-01-06\",\"\",\"PT Nobody\",\"BIb\",\"30x30 cm\",\"UGL\",\"Rectified\",\"Rak A-02\",\"Sampel Aktif\"\n\
\"2024-01-07\",\"Mulia\",\"PT Mulia Industrindo\",\"BIIa\",\"40x40 cm\",\"GL\",\"Non-Rectified\",\"Rak B-01\",\"Sampel Nonaktif\"";

    fn gateway(server: &Server) -> HttpGateway {
        HttpGateway::new(GatewayConfig::new(
            format!("{}/sheet.csv", server.url()),
            format!("{}/exec", server.url()),
        ))
    }

    fn draft() -> TileDraft {
        TileDraft {
            entry_date: "2024-06-01".to_string(),
            brand: "Granito".to_string(),
            manufacturer: "PT Granitoguna".to_string(),
            working_size: "60x120 cm".to_string(),
            location: "Rak D-04".to_string(),
            ..TileDraft::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_all_parses_and_filters() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/sheet.csv")
            .with_status(200)
            .with_body(SHEET)
            .create_async()
            .await;

        let records = gateway(&server).fetch_all().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].brand, "Roman");
        assert_eq!(records[1].status, "Sampel Nonaktif");
    }

    #[tokio::test]
    async fn test_fetch_all_non_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/sheet.csv")
            .with_status(404)
            .create_async()
            .await;

        let err = gateway(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, InventoryError::Fetch(ref m) if m.contains("404")));
    }

    #[tokio::test]
    async fn test_fetch_all_html_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/sheet.csv")
            .with_status(200)
            .with_body("<html><body>Sign in to continue</body></html>")
            .create_async()
            .await;

        let err = gateway(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, InventoryError::Parse(_)));
    }

    #[tokio::test]
    async fn test_create_posts_plain_text_envelope() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/exec")
            .match_header("content-type", SCRIPT_CONTENT_TYPE)
            .match_body(Matcher::PartialJsonString(
                r#"{"action":"add","brand":"Granito","lokasiSampel":"Rak D-04"}"#.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create_async()
            .await;

        let record = gateway(&server).create(draft()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.brand, "Granito");
        assert!(record.id.starts_with("tile-"));
    }

    #[tokio::test]
    async fn test_create_remote_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/exec")
            .with_status(200)
            .with_body(r#"{"status":"error","message":"Sheet1 not found"}"#)
            .create_async()
            .await;

        let err = gateway(&server).create(draft()).await.unwrap_err();
        assert_eq!(err, InventoryError::Remote("Sheet1 not found".to_string()));
    }

    #[tokio::test]
    async fn test_create_http_error_is_network() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/exec")
            .with_status(500)
            .with_body("Script function not found: doPost")
            .create_async()
            .await;

        let err = gateway(&server).create(draft()).await.unwrap_err();
        match err {
            InventoryError::Network(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("doPost"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_sends_id_and_action() {
        let mut server = Server::new_async().await;
        let record = TileRecord::from_draft(draft());
        let mock = server
            .mock("POST", "/exec")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "action": "delete",
                "id": record.id.clone(),
            })))
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create_async()
            .await;

        gateway(&server).delete(&record).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_script_is_network_error() {
        let gateway = HttpGateway::new(GatewayConfig::new(
            "http://127.0.0.1:9/sheet.csv",
            "http://127.0.0.1:9/exec",
        ));

        let err = gateway.delete(&TileRecord::from_draft(draft())).await.unwrap_err();
        assert!(matches!(err, InventoryError::Network(_)));

        let err = gateway.fetch_all().await.unwrap_err();
        assert!(matches!(err, InventoryError::Fetch(_)));
    }
}
