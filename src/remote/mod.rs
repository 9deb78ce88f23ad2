//! Remote identification client.
//!
//! Performs exactly one multipart POST per identification attempt and
//! maps the three server outcomes — transport failure, server-reported
//! error, full result — onto the crate error taxonomy. No retries, no
//! caching, no authentication.

use crate::config::RemoteConfig;
use crate::constants::{UNKNOWN_SERVER_ERROR, UPLOAD_PART_NAME};
use crate::error::{Error, Result};
use crate::identify::{RemoteBackend, SpeciesDetails};
use crate::media::ImageHandle;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for the remote identification endpoint.
pub struct RemoteClient {
    client: Client,
    endpoint: String,
}

impl RemoteClient {
    /// Build a client with explicit connect and total timeouts.
    ///
    /// A request that exceeds either timeout surfaces as an upload
    /// failure, the same as an unreachable endpoint.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Upload the image and interpret the server's response.
    pub async fn upload(&self, image: &ImageHandle) -> Result<SpeciesDetails> {
        let bytes = image.read_bytes()?;
        debug!("Uploading {} bytes to {}", bytes.len(), self.endpoint);

        let part = Part::bytes(bytes)
            .file_name(image.upload_name().to_string())
            .mime_str(image.mime())
            .map_err(|e| Error::Internal {
                message: format!("invalid MIME type '{}': {e}", image.mime()),
            })?;
        let form = Form::new().part(UPLOAD_PART_NAME, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Upload {
                url: self.endpoint.clone(),
                source: Box::new(e),
            })?;

        let ok = response.status().is_success();
        let body = response.text().await.map_err(|e| Error::Upload {
            url: self.endpoint.clone(),
            source: Box::new(e),
        })?;

        interpret_response(ok, &body)
    }
}

#[async_trait]
impl RemoteBackend for RemoteClient {
    async fn identify(&self, image: &ImageHandle) -> Result<SpeciesDetails> {
        self.upload(image).await
    }
}

/// Wire shape of the server's JSON response.
#[derive(Debug, Deserialize)]
struct RemoteResponse {
    #[serde(rename = "Animal")]
    animal: Option<String>,
    #[serde(rename = "ScientificName")]
    scientific_name: Option<String>,
    #[serde(rename = "LocalNames")]
    local_names: Option<String>,
    #[serde(rename = "Venom")]
    venom: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "ConservationStatus")]
    conservation_status: Option<String>,
    #[serde(rename = "FunFact")]
    fun_fact: Option<String>,
    #[serde(rename = "Treatment")]
    treatment: Option<String>,
    #[serde(rename = "Family")]
    family: Option<String>,
    #[serde(rename = "EndemicStatus")]
    endemic_status: Option<String>,
    error: Option<String>,
}

impl RemoteResponse {
    fn into_details(self) -> Result<SpeciesDetails> {
        let name = self.animal.ok_or_else(|| Error::ResponseInvalid {
            reason: "missing species name".to_string(),
        })?;

        Ok(SpeciesDetails {
            name,
            scientific_name: self.scientific_name,
            local_names: self.local_names,
            venom: self.venom,
            description: self.description,
            conservation_status: self.conservation_status,
            fun_fact: self.fun_fact,
            treatment: self.treatment,
            family: self.family,
            endemic_status: self.endemic_status,
        })
    }
}

/// Map a response body onto the three server outcomes.
///
/// A non-empty `error` field wins over the HTTP status; a non-success
/// status without one gets a fixed unknown-error message; otherwise the
/// result passes through unchanged.
fn interpret_response(ok: bool, body: &str) -> Result<SpeciesDetails> {
    let response: RemoteResponse =
        serde_json::from_str(body).map_err(|e| Error::ResponseParse { source: e })?;

    if let Some(message) = response.error.as_deref().filter(|m| !m.is_empty()) {
        return Err(Error::Server {
            message: message.to_string(),
        });
    }

    if !ok {
        return Err(Error::Server {
            message: UNKNOWN_SERVER_ERROR.to_string(),
        });
    }

    response.into_details()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_passes_through_unchanged() {
        let body = r#"{
            "Animal": "Indian Cobra",
            "ScientificName": "Naja naja (Linnaeus, 1758)",
            "LocalNames": "Naya / Nalla pambu",
            "Venom": "Highly venomous.",
            "Description": "A large hooded elapid.",
            "ConservationStatus": "Least Concern",
            "FunFact": "Cobras can spread their ribs into a hood.",
            "Family": "Elapidae"
        }"#;

        let details = interpret_response(true, body).unwrap();
        assert_eq!(details.name, "Indian Cobra");
        assert_eq!(
            details.scientific_name.as_deref(),
            Some("Naja naja (Linnaeus, 1758)")
        );
        assert_eq!(details.local_names.as_deref(), Some("Naya / Nalla pambu"));
        assert_eq!(details.venom.as_deref(), Some("Highly venomous."));
        assert_eq!(details.description.as_deref(), Some("A large hooded elapid."));
        assert_eq!(details.conservation_status.as_deref(), Some("Least Concern"));
        assert_eq!(
            details.fun_fact.as_deref(),
            Some("Cobras can spread their ribs into a hood.")
        );
        assert_eq!(details.family.as_deref(), Some("Elapidae"));
    }

    #[test]
    fn test_server_error_passes_through_verbatim() {
        let body = r#"{"error": "Could not identify the animal."}"#;

        let err = interpret_response(true, body).unwrap_err();
        assert!(matches!(err, Error::Server { .. }));
        assert_eq!(err.to_string(), "Could not identify the animal.");
    }

    #[test]
    fn test_error_field_wins_over_success_status() {
        let body = r#"{"Animal": "Indian Cobra", "error": "model overloaded"}"#;

        let err = interpret_response(true, body).unwrap_err();
        assert_eq!(err.to_string(), "model overloaded");
    }

    #[test]
    fn test_failure_status_without_error_field() {
        let body = r#"{"Animal": "Indian Cobra"}"#;

        let err = interpret_response(false, body).unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_SERVER_ERROR);
    }

    #[test]
    fn test_empty_error_field_is_ignored() {
        let body = r#"{"Animal": "Rat Snake", "error": ""}"#;

        let details = interpret_response(true, body).unwrap();
        assert_eq!(details.name, "Rat Snake");
    }

    #[test]
    fn test_unparseable_body_is_parse_error() {
        let err = interpret_response(true, "<html>502</html>").unwrap_err();
        assert!(matches!(err, Error::ResponseParse { .. }));
    }

    #[test]
    fn test_success_without_name_is_invalid() {
        let body = r#"{"Description": "something"}"#;

        let err = interpret_response(true, body).unwrap_err();
        assert!(matches!(err, Error::ResponseInvalid { .. }));
    }
}
