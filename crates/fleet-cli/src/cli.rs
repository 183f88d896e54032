use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use fleet_core::models::config::{DEFAULT_AUTH_TIMEOUT, DEFAULT_PROBE_TIMEOUT};
use fleet_core::models::{ProbeConfig, SortOrder};
use fleet_core::services::roster_loader::{RosterFilter, DEFAULT_ROSTER_FILENAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Check which servers in the fleet are up and which version each one runs.
#[derive(Debug, Parser)]
#[command(name = "fleet-probe", version)]
pub struct Cli {
    /// Roster file listing `origin` and `type` for every server (YAML or JSON).
    #[arg(short, long, default_value = DEFAULT_ROSTER_FILENAME)]
    pub roster: PathBuf,

    /// Env file with HUB_USERNAME / HUB_PASSWORD. Defaults to ./.env when present.
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Only probe servers of this type.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Only probe servers whose origin contains this text.
    #[arg(short, long, value_name = "TEXT")]
    pub name: Option<String>,

    #[arg(long, value_name = "MS", default_value_t = (DEFAULT_AUTH_TIMEOUT.as_millis() as u64))]
    pub auth_timeout_ms: u64,

    #[arg(long, value_name = "MS", default_value_t = (DEFAULT_PROBE_TIMEOUT.as_millis() as u64))]
    pub probe_timeout_ms: u64,

    /// Validate TLS certificates instead of accepting self-signed ones.
    #[arg(long)]
    pub strict_tls: bool,

    /// List the newest versions first.
    #[arg(long)]
    pub descending: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Disable colors even when stdout is a terminal.
    #[arg(long)]
    pub no_color: bool,

    /// Write debug logs to .fleet-probe-debug.log.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            auth_timeout: Duration::from_millis(self.auth_timeout_ms),
            probe_timeout: Duration::from_millis(self.probe_timeout_ms),
            accept_invalid_certs: !self.strict_tls,
            sort_order: if self.descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
        }
    }

    pub fn roster_filter(&self) -> RosterFilter {
        RosterFilter {
            kind: self.kind.clone(),
            origin_contains: self.name.clone(),
        }
    }
}
