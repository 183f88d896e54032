use std::time::Duration;

use reqwest::header::{HeaderMap, SET_COOKIE};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::models::{AuthenticatedServer, Credentials, ServerDescriptor};

pub const LOGIN_PATH: &str = "/j_spring_security_check";
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Logs into fleet members with a fixed set of credentials.
///
/// Each call is independent. Failures never propagate; they are folded into
/// the returned [`AuthenticatedServer`].
pub struct Authenticator {
    client: Client,
    credentials: Credentials,
    timeout: Duration,
}

impl Authenticator {
    pub fn new(client: Client, credentials: Credentials, timeout: Duration) -> Self {
        Self {
            client,
            credentials,
            timeout,
        }
    }

    pub async fn authenticate(&self, server: ServerDescriptor) -> AuthenticatedServer {
        let login_url = match resolve(&server.origin, LOGIN_PATH) {
            Ok(url) => url,
            Err(reason) => {
                warn!(origin = %server.origin, %reason, "invalid origin");
                return AuthenticatedServer::unreachable(server, reason);
            }
        };

        let response = match self
            .client
            .post(login_url)
            .form(&self.credentials.form_fields())
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let reason = describe_error(&e);
                debug!(origin = %server.origin, error = %e, "login_failed");
                return AuthenticatedServer::unreachable(server, reason);
            }
        };

        let status = response.status();
        let session_id = session_cookie(response.headers());
        debug!(
            origin = %server.origin,
            status = status.as_u16(),
            has_session = session_id.is_some(),
            "login_response"
        );

        if status == StatusCode::NO_CONTENT {
            AuthenticatedServer::alive(server, session_id)
        } else {
            AuthenticatedServer::rejected(server, session_id, status.as_u16())
        }
    }
}

/// Resolve an absolute path (with optional query) against a server origin.
pub(crate) fn resolve(origin: &str, path: &str) -> Result<Url, String> {
    Url::parse(origin)
        .and_then(|base| base.join(path))
        .map_err(|e| format!("invalid origin '{origin}': {e}"))
}

pub(crate) fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "timed out".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    }
}

/// Session id from the first `Set-Cookie` header, if it names the session cookie.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(SET_COOKIE)?.to_str().ok()?;
    cookie_value(header, SESSION_COOKIE)
}

fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}
