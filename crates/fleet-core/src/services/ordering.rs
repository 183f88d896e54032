use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::models::{AuthenticatedServer, SortOrder};

use super::manifest::release_portion;

/// Origin → version for every live server that reported one.
pub type VersionMap = HashMap<String, String>;

static LENIENT_RELEASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[vV]?(\d+)?(?:\.(\d+))?(?:\.(\d+))?").unwrap()
});

/// Comparable key for the release portion of a version string.
///
/// Strict semver is tried first. Anything else is coerced segment by segment,
/// so `1.2` becomes `1.2.0` and garbage becomes `0.0.0`.
pub fn release_key(version: &str) -> Version {
    let release = release_portion(version).trim();
    if let Ok(parsed) = Version::parse(release) {
        return parsed;
    }

    let segment = |caps: &regex::Captures<'_>, i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    match LENIENT_RELEASE_RE.captures(release) {
        Some(caps) => Version::new(segment(&caps, 1), segment(&caps, 2), segment(&caps, 3)),
        None => Version::new(0, 0, 0),
    }
}

/// Total order over optional versions: versioned servers always come first,
/// versioned pairs compare by semver precedence of their release portion.
pub fn compare_versions(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => release_key(a).cmp_precedence(&release_key(b)),
    }
}

/// Sort servers for display. The sort is stable, so servers that compare
/// equal (including all versionless ones) keep their roster order.
pub fn sort_servers(servers: &mut [AuthenticatedServer], versions: &VersionMap, order: SortOrder) {
    servers.sort_by(|a, b| {
        let version_a = versions.get(a.origin()).map(String::as_str);
        let version_b = versions.get(b.origin()).map(String::as_str);
        match (order, version_a, version_b) {
            (SortOrder::Descending, Some(_), Some(_)) => compare_versions(version_b, version_a),
            _ => compare_versions(version_a, version_b),
        }
    });
}
