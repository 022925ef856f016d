use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use backtrace::Backtrace;

#[derive(Debug)]
pub(crate) struct Error {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    Io(io::Error),
    Config { path: PathBuf, source: io::Error },
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    InvalidRole { name: String },
    InvalidRoutePattern { pattern: String, description: String },
    InvalidDecimal { input: String },
    InvalidTime { input: String },
    PortalClosed,
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(err) => err.fmt(f),
            ErrorKind::Config { path, source } => {
                write!(f, "read config {}. {}", path.display(), source)
            }
            ErrorKind::Yaml(err) => write!(f, "yaml error. {}", err),
            ErrorKind::Json(err) => write!(f, "json error. {}", err),
            ErrorKind::InvalidRole { name } => write!(f, "invalid role: {}", name),
            ErrorKind::InvalidRoutePattern {
                pattern,
                description,
            } => {
                write!(f, "invalid route pattern '{}'. {}", pattern, description)
            }
            ErrorKind::InvalidDecimal { input } => write!(f, "invalid decimal: {}", input),
            ErrorKind::InvalidTime { input } => write!(f, "invalid time: {}", input),
            ErrorKind::PortalClosed => write!(f, "portal closed"),
            ErrorKind::Internal(description) => write!(f, "internal error. {}", description),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::from(ErrorKind::Yaml(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from(ErrorKind::Json(err))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::with_backtrace(kind)
    }
}

impl Error {
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    fn with_backtrace(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl error::Error for Error {}
