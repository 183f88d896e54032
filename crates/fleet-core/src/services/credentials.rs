use std::collections::HashMap;
use std::path::Path;

use crate::error::{ProbeError, Result};
use crate::models::Credentials;

pub const USERNAME_VAR: &str = "HUB_USERNAME";
pub const PASSWORD_VAR: &str = "HUB_PASSWORD";
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Resolve login credentials.
///
/// Variables already present in the process environment win over the env
/// file, matching the usual dotenv convention. An explicit `env_file` must
/// exist; the default `.env` is optional. The process environment is never
/// modified.
pub fn load(env_file: Option<&Path>) -> Result<Credentials> {
    let file_vars = match env_file {
        Some(path) => read_env_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_ENV_FILENAME);
            if default_path.exists() {
                read_env_file(default_path)?
            } else {
                HashMap::new()
            }
        }
    };
    from_sources(&file_vars, |key| std::env::var(key).ok())
}

pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let credential_file_error = |e: dotenvy::Error| ProbeError::CredentialFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    dotenvy::from_path_iter(path)
        .map_err(credential_file_error)?
        .map(|item| item.map_err(credential_file_error))
        .collect()
}

pub fn from_sources(
    file_vars: &HashMap<String, String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Credentials> {
    let lookup = |key: &str| -> Result<String> {
        env(key)
            .filter(|v| !v.is_empty())
            .or_else(|| file_vars.get(key).cloned())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ProbeError::MissingCredential(key.to_string()))
    };
    Ok(Credentials::new(lookup(USERNAME_VAR)?, lookup(PASSWORD_VAR)?))
}
