use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::AuthenticatedServer;

use super::authenticator::{describe_error, resolve, SESSION_COOKIE};
use super::manifest::{extract_version, ManifestVersion};

pub const MANIFEST_PATH: &str = "/debug?manifest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(String),
    /// Manifest had the marker line but an empty value.
    NoVersion,
    /// Manifest had no version line at all.
    MarkerMissing,
    /// The request itself failed (transport, timeout, error status).
    Failed(String),
}

/// What a single version probe learned about one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub origin: String,
    pub outcome: ProbeOutcome,
}

impl VersionRecord {
    pub fn version(&self) -> Option<&str> {
        match &self.outcome {
            ProbeOutcome::Found(version) => Some(version),
            _ => None,
        }
    }
}

pub struct VersionProbe {
    client: Client,
    timeout: Duration,
}

impl VersionProbe {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetch and parse the manifest of a live server.
    ///
    /// Servers that are not alive are never contacted.
    pub async fn probe(&self, server: &AuthenticatedServer) -> VersionRecord {
        let origin = server.origin().to_string();
        if !server.is_alive() {
            return VersionRecord {
                origin,
                outcome: ProbeOutcome::Failed("not alive".into()),
            };
        }

        let outcome = match self.fetch_manifest(server).await {
            Ok(manifest) => match extract_version(&manifest) {
                ManifestVersion::Found(version) => ProbeOutcome::Found(version),
                ManifestVersion::Blank => ProbeOutcome::NoVersion,
                ManifestVersion::Missing => {
                    warn!(origin = %origin, "manifest has no version line");
                    ProbeOutcome::MarkerMissing
                }
            },
            Err(reason) => {
                debug!(origin = %origin, %reason, "manifest_failed");
                ProbeOutcome::Failed(reason)
            }
        };

        VersionRecord { origin, outcome }
    }

    async fn fetch_manifest(&self, server: &AuthenticatedServer) -> Result<String, String> {
        let url = resolve(server.origin(), MANIFEST_PATH)?;

        let mut request = self.client.get(url).timeout(self.timeout);
        if let Some(session_id) = &server.session_id {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={session_id}"));
        }

        let response = request.send().await.map_err(|e| describe_error(&e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("manifest returned HTTP {}", status.as_u16()));
        }
        response.text().await.map_err(|e| describe_error(&e))
    }
}
