use serde::{Deserialize, Serialize};

/// A single deployment target from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    pub origin: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ServerDescriptor {
    pub fn new(origin: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            kind: kind.into(),
        }
    }
}

/// Why a server is (or is not) considered alive after authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The login endpoint answered 204 No Content.
    Alive,
    /// The login endpoint answered, but not with 204.
    Rejected { status: u16 },
    /// No HTTP response was received at all.
    Unreachable { reason: String },
}

impl AuthOutcome {
    /// Short explanation for a server that is down, `None` when alive.
    pub fn down_reason(&self) -> Option<String> {
        match self {
            AuthOutcome::Alive => None,
            AuthOutcome::Rejected { status } => Some(format!("login returned HTTP {status}")),
            AuthOutcome::Unreachable { reason } => Some(format!("unreachable: {reason}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedServer {
    pub server: ServerDescriptor,
    pub session_id: Option<String>,
    pub outcome: AuthOutcome,
}

impl AuthenticatedServer {
    pub fn alive(server: ServerDescriptor, session_id: Option<String>) -> Self {
        Self {
            server,
            session_id,
            outcome: AuthOutcome::Alive,
        }
    }

    pub fn rejected(server: ServerDescriptor, session_id: Option<String>, status: u16) -> Self {
        Self {
            server,
            session_id,
            outcome: AuthOutcome::Rejected { status },
        }
    }

    /// A server that never produced a response keeps no session.
    pub fn unreachable(server: ServerDescriptor, reason: impl Into<String>) -> Self {
        Self {
            server,
            session_id: None,
            outcome: AuthOutcome::Unreachable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_alive(&self) -> bool {
        self.outcome == AuthOutcome::Alive
    }

    pub fn origin(&self) -> &str {
        &self.server.origin
    }
}
