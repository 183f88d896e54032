/// Marker identifying the version line in a `/debug?manifest` payload.
pub const VERSION_MARKER: &str = "Product-version";

const VALUE_SEPARATOR: &str = ": ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestVersion {
    Found(String),
    /// The marker line exists but carries no value.
    Blank,
    /// No line contains the marker.
    Missing,
}

impl ManifestVersion {
    pub fn into_version(self) -> Option<String> {
        match self {
            ManifestVersion::Found(version) => Some(version),
            ManifestVersion::Blank | ManifestVersion::Missing => None,
        }
    }
}

/// Pull the product version out of a newline-delimited manifest.
///
/// Only the first line containing the marker is considered. Its value is
/// everything after the first `": "`, trimmed.
pub fn extract_version(manifest: &str) -> ManifestVersion {
    let Some(line) = manifest.split('\n').find(|l| l.contains(VERSION_MARKER)) else {
        return ManifestVersion::Missing;
    };

    match line.split_once(VALUE_SEPARATOR) {
        Some((_, value)) if !value.trim().is_empty() => {
            ManifestVersion::Found(value.trim().to_string())
        }
        _ => ManifestVersion::Blank,
    }
}

/// The part of a version string before the first `-`, e.g. `3.2.1` for `3.2.1-beta`.
pub fn release_portion(version: &str) -> &str {
    version.split('-').next().unwrap_or(version)
}
