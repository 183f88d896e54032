use std::fmt;
use std::time::Duration;

/// Login credentials submitted as `j_username` / `j_password`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("j_username", self.username.as_str()),
            ("j_password", self.password.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Lowest release first.
    #[default]
    Ascending,
    /// Highest release first.
    Descending,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub auth_timeout: Duration,
    pub probe_timeout: Duration,
    /// Skip TLS certificate validation. The fleet commonly runs self-signed certs.
    pub accept_invalid_certs: bool,
    pub sort_order: SortOrder,
}

pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3000);

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            auth_timeout: DEFAULT_AUTH_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            accept_invalid_certs: true,
            sort_order: SortOrder::Ascending,
        }
    }
}
