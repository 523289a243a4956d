//! Provider credential loading.
//!
//! The key is read once at startup and handed to the client explicitly. A
//! missing key is not an error here: the request goes out with an empty key
//! and the provider's rejection shows up in the report.

use std::env;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";

/// Alpha Vantage API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Empty key sent when no credential is configured.
    pub const fn placeholder() -> Self {
        Self(String::new())
    }

    /// Read [`API_KEY_VAR`] from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(API_KEY_VAR, |name| env::var(name).ok())
    }

    /// Read `name` through `lookup`. Blank values count as absent.
    pub fn from_lookup<F>(name: &str, lookup: F) -> Option<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(name)
            .filter(|value| !value.trim().is_empty())
            .map(Self)
    }

    /// Fall back to [`Credential::placeholder`] when nothing was found.
    pub fn resolve(found: Option<Self>) -> Self {
        found.unwrap_or_else(|| {
            warn!(
                var = API_KEY_VAR,
                "API key not set, requests will be sent without a key"
            );
            Self::placeholder()
        })
    }

    /// Load `.env` if present, then read [`API_KEY_VAR`]. Never fails.
    pub fn load() -> Self {
        load_dotenv();
        Self::resolve(Self::from_env())
    }

    /// The raw key, for building request URLs.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

/// Merge `.env` from the working directory (or a parent) into the process
/// environment. Existing variables are left untouched.
///
/// Returns the path of the file that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenv::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(err) => {
            log_dotenv_error(&err);
            None
        }
    }
}

/// Merge an explicit environment file into the process environment.
/// Existing variables are left untouched.
///
/// Returns whether the file was loaded.
pub fn load_dotenv_from(path: &Path) -> bool {
    match dotenv::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded environment file");
            true
        }
        Err(err) => {
            log_dotenv_error(&err);
            false
        }
    }
}

fn log_dotenv_error(err: &dotenv::Error) {
    match err {
        dotenv::Error::Io(io) if io.kind() == ErrorKind::NotFound => {
            debug!("no environment file found");
        }
        other => warn!(error = %other, "failed to load environment file"),
    }
}
