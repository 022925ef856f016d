pub(crate) mod internal;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::common::trace;

#[derive(Debug)]
pub enum EdrakError {
    Io(io::Error),
    // Configuration file could not be read.
    Config { path: PathBuf, source: io::Error },
    // Configuration file could not be parsed.
    Yaml(serde_yaml::Error),
    // Catalog record could not be parsed.
    Json(serde_json::Error),
    InvalidRole { name: String },
    InvalidRoutePattern { pattern: String, description: String },
    InvalidDecimal { input: String },
    InvalidTime { input: String },
    // Portal request loop is no longer running.
    PortalClosed,
    Internal(String),
}

impl fmt::Display for EdrakError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdrakError::Io(err) => err.fmt(f),
            EdrakError::Config { path, source } => write!(
                f,
                "configuration file '{}' could not be read. {}",
                path.display(),
                source
            ),
            EdrakError::Yaml(err) => write!(f, "invalid configuration. {}", err),
            EdrakError::Json(err) => write!(f, "invalid catalog record. {}", err),
            EdrakError::InvalidRole { name } => {
                write!(f, "unknown role '{}' (expected student, teacher or admin)", name)
            }
            EdrakError::InvalidRoutePattern {
                pattern,
                description,
            } => write!(f, "invalid route pattern '{}'. {}", pattern, description),
            EdrakError::InvalidDecimal { input } => write!(f, "invalid decimal '{}'", input),
            EdrakError::InvalidTime { input } => {
                write!(f, "invalid time '{}' (expected RFC 3339 or YYYY-MM-DD)", input)
            }
            EdrakError::PortalClosed => write!(f, "portal is not running"),
            EdrakError::Internal(description) => write!(f, "internal error. {}", description),
        }
    }
}

impl EdrakError {
    /// Process exit code for the `edrak` command: 2 for configuration errors,
    /// 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            EdrakError::Config { .. }
            | EdrakError::Yaml(_)
            | EdrakError::InvalidRole { .. }
            | EdrakError::InvalidRoutePattern { .. } => 2,
            // Bad command line input such as `--price=-5` or `--now tomorrow`.
            EdrakError::InvalidDecimal { .. } | EdrakError::InvalidTime { .. } => 1,
            EdrakError::Io(_)
            | EdrakError::Json(_)
            | EdrakError::PortalClosed
            | EdrakError::Internal(_) => 1,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.exit_code() == 2
    }
}

impl std::error::Error for EdrakError {}

impl From<io::Error> for EdrakError {
    fn from(err: io::Error) -> Self {
        EdrakError::Io(err)
    }
}

impl From<internal::Error> for EdrakError {
    fn from(err: internal::Error) -> Self {
        use internal::ErrorKind;

        trace!(backtrace=?err.backtrace(), "{}", err);

        match err.into_kind() {
            ErrorKind::Io(err) => EdrakError::Io(err),
            ErrorKind::Config { path, source } => EdrakError::Config { path, source },
            ErrorKind::Yaml(err) => EdrakError::Yaml(err),
            ErrorKind::Json(err) => EdrakError::Json(err),
            ErrorKind::InvalidRole { name } => EdrakError::InvalidRole { name },
            ErrorKind::InvalidRoutePattern {
                pattern,
                description,
            } => EdrakError::InvalidRoutePattern {
                pattern,
                description,
            },
            ErrorKind::InvalidDecimal { input } => EdrakError::InvalidDecimal { input },
            ErrorKind::InvalidTime { input } => EdrakError::InvalidTime { input },
            ErrorKind::PortalClosed => EdrakError::PortalClosed,
            ErrorKind::Internal(description) => EdrakError::Internal(description),
        }
    }
}
