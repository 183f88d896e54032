use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::{ProbeError, Result};
use crate::models::{
    AuthenticatedServer, Credentials, ProbeConfig, Report, ServerDescriptor, SortOrder,
};

use super::authenticator::Authenticator;
use super::ordering::{sort_servers, VersionMap};
use super::report_builder::build_report;
use super::version_probe::{ProbeOutcome, VersionProbe, VersionRecord};

/// Result of one probe run: every roster entry, sorted, plus the versions found.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub servers: Vec<AuthenticatedServer>,
    pub versions: VersionMap,
}

impl FleetSnapshot {
    pub fn report(&self) -> Report {
        build_report(&self.servers, &self.versions)
    }
}

/// Drives the authenticate → probe → sort pipeline over a roster.
pub struct FleetProber {
    authenticator: Authenticator,
    version_probe: VersionProbe,
    sort_order: SortOrder,
}

impl FleetProber {
    pub fn new(config: &ProbeConfig, credentials: Credentials) -> Result<Self> {
        let client = build_client(config)?;
        Ok(Self::with_client(client, config, credentials))
    }

    pub fn with_client(client: Client, config: &ProbeConfig, credentials: Credentials) -> Self {
        Self {
            authenticator: Authenticator::new(client.clone(), credentials, config.auth_timeout),
            version_probe: VersionProbe::new(client, config.probe_timeout),
            sort_order: config.sort_order,
        }
    }

    /// Probe every server once. Per-server failures are folded into the
    /// snapshot; this never fails as a whole.
    pub async fn run(&self, roster: Vec<ServerDescriptor>) -> FleetSnapshot {
        let total = roster.len();
        let mut servers = join_all(
            roster
                .into_iter()
                .map(|server| self.authenticator.authenticate(server)),
        )
        .await;

        let live: Vec<&AuthenticatedServer> = servers.iter().filter(|s| s.is_alive()).collect();
        debug!(total, live = live.len(), "authentication_complete");

        let records = join_all(live.into_iter().map(|s| self.version_probe.probe(s))).await;
        let versions = version_map(records);

        sort_servers(&mut servers, &versions, self.sort_order);

        info!(
            total,
            up = servers.iter().filter(|s| s.is_alive()).count(),
            versioned = versions.len(),
            "fleet_probe_complete"
        );

        FleetSnapshot { servers, versions }
    }
}

/// One HTTP client shared by every request of a run.
pub fn build_client(config: &ProbeConfig) -> Result<Client> {
    Client::builder()
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .user_agent(concat!("fleet-probe/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProbeError::HttpClient(e.to_string()))
}

/// Collapse probe records into an origin → version map, skipping records
/// without a version.
pub fn version_map(records: impl IntoIterator<Item = VersionRecord>) -> VersionMap {
    records
        .into_iter()
        .filter_map(|record| match record.outcome {
            ProbeOutcome::Found(version) => Some((record.origin, version)),
            _ => None,
        })
        .collect()
}
