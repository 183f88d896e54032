use chrono::{DateTime, Utc};

use crate::models::{AuthenticatedServer, Report, ReportRow, ServerStatus};

use super::ordering::VersionMap;

/// Map already-sorted servers to display rows.
pub fn build_report(servers: &[AuthenticatedServer], versions: &VersionMap) -> Report {
    build_report_at(servers, versions, Utc::now())
}

/// Same as [`build_report`] with a pinned timestamp.
pub fn build_report_at(
    servers: &[AuthenticatedServer],
    versions: &VersionMap,
    generated_at: DateTime<Utc>,
) -> Report {
    let rows = servers
        .iter()
        .map(|auth| ReportRow {
            origin: auth.server.origin.clone(),
            kind: auth.server.kind.clone(),
            version: versions.get(auth.origin()).cloned(),
            status: ServerStatus::from_alive(auth.is_alive()),
            reason: auth.outcome.down_reason(),
        })
        .collect();

    Report { generated_at, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerDescriptor;

    #[test]
    fn one_row_per_server_in_order() {
        let servers = vec![
            AuthenticatedServer::alive(ServerDescriptor::new("https://a", "typeX"), None),
            AuthenticatedServer::rejected(ServerDescriptor::new("https://b", "typeY"), None, 401),
            AuthenticatedServer::unreachable(ServerDescriptor::new("https://c", "typeZ"), "timed out"),
        ];
        let versions: VersionMap = [("https://a".to_string(), "2.0.0".to_string())]
            .into_iter()
            .collect();

        let report = build_report(&servers, &versions);
        let grid = report.grid();
        assert_eq!(grid.len(), servers.len() + 1);
        assert_eq!(grid[1], ["https://a", "typeX", "2.0.0", "UP"]);
        assert_eq!(grid[2], ["https://b", "typeY", "N/A", "DOWN"]);
        assert_eq!(grid[3], ["https://c", "typeZ", "N/A", "DOWN"]);
        assert_eq!(report.rows[1].reason.as_deref(), Some("login returned HTTP 401"));
        assert!(report.rows[0].reason.is_none());
    }

    #[test]
    fn alive_without_version_is_up_and_na() {
        let servers = vec![AuthenticatedServer::alive(
            ServerDescriptor::new("https://a", "hub"),
            Some("s".into()),
        )];
        let report = build_report(&servers, &VersionMap::new());
        assert_eq!(report.rows[0].status, ServerStatus::Up);
        assert_eq!(report.rows[0].version_label(), "N/A");
    }

    #[test]
    fn empty_roster_yields_header_only() {
        let report = build_report(&[], &VersionMap::new());
        assert_eq!(report.grid().len(), 1);
    }
}
