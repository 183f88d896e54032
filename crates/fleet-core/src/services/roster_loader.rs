use std::path::Path;

use crate::error::{ProbeError, Result};
use crate::models::ServerDescriptor;

pub const DEFAULT_ROSTER_FILENAME: &str = "servers.yaml";

/// Load the server roster. YAML and JSON files are both accepted.
pub fn load(path: &Path) -> Result<Vec<ServerDescriptor>> {
    if !path.exists() {
        return Err(ProbeError::RosterNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

pub fn parse(contents: &str) -> Result<Vec<ServerDescriptor>> {
    let servers: Vec<ServerDescriptor> = serde_yaml::from_str(contents)
        .map_err(|e| ProbeError::InvalidRoster(e.to_string()))?;
    if let Some(index) = servers.iter().position(|s| s.origin.trim().is_empty()) {
        return Err(ProbeError::InvalidRoster(format!(
            "entry {index} has an empty origin"
        )));
    }
    Ok(servers)
}

/// Narrows a roster before probing.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    /// Exact (case-insensitive) match on the server type.
    pub kind: Option<String>,
    /// Substring match on the origin.
    pub origin_contains: Option<String>,
}

impl RosterFilter {
    pub fn matches(&self, server: &ServerDescriptor) -> bool {
        let kind_ok = self
            .kind
            .as_ref()
            .map_or(true, |k| server.kind.eq_ignore_ascii_case(k));
        let origin_ok = self
            .origin_contains
            .as_ref()
            .map_or(true, |needle| server.origin.contains(needle.as_str()));
        kind_ok && origin_ok
    }

    pub fn apply(&self, servers: Vec<ServerDescriptor>) -> Vec<ServerDescriptor> {
        servers.into_iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_yaml_roster() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = r#"
- origin: https://hub-eu.example.com
  type: production
- origin: https://hub-staging.example.com:8443
  type: staging
"#;
        let path = dir.path().join(DEFAULT_ROSTER_FILENAME);
        fs::write(&path, yaml).unwrap();
        let servers = load(&path).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].origin, "https://hub-eu.example.com");
        assert_eq!(servers[1].kind, "staging");
    }

    #[test]
    fn parse_json_roster() {
        let json = r#"[{"origin": "https://a.example", "type": "qa"}]"#;
        let servers = parse(json).unwrap();
        assert_eq!(servers, vec![ServerDescriptor::new("https://a.example", "qa")]);
    }

    #[test]
    fn duplicate_origins_are_kept() {
        let yaml = "- origin: https://a\n  type: x\n- origin: https://a\n  type: y\n";
        assert_eq!(parse(yaml).unwrap().len(), 2);
    }

    #[test]
    fn missing_roster_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("nope.yaml")),
            Err(ProbeError::RosterNotFound(_))
        ));
    }

    #[test]
    fn empty_origin_is_invalid() {
        let yaml = "- origin: \"\"\n  type: hub\n";
        assert!(matches!(parse(yaml), Err(ProbeError::InvalidRoster(_))));
    }

    #[test]
    fn missing_type_is_invalid() {
        assert!(matches!(
            parse("- origin: https://a\n"),
            Err(ProbeError::InvalidRoster(_))
        ));
    }

    #[test]
    fn filter_by_type_and_origin() {
        let servers = vec![
            ServerDescriptor::new("https://eu.example", "production"),
            ServerDescriptor::new("https://us.example", "production"),
            ServerDescriptor::new("https://eu-qa.example", "qa"),
        ];
        let filter = RosterFilter {
            kind: Some("Production".into()),
            origin_contains: Some("eu".into()),
        };
        let kept = filter.apply(servers.clone());
        assert_eq!(kept, vec![servers[0].clone()]);
        assert_eq!(RosterFilter::default().apply(servers).len(), 3);
    }
}
