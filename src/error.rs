use std::fmt::Formatter;
use std::path::PathBuf;

use crate::model::Method;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    Usage(String),
    PayloadParse(String),
    ClientBuild(reqwest::Error),
    Transport {
        method: Method,
        url: String,
        source: reqwest::Error,
    },
    LogDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    LogWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    ChartRender {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub fn usage(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::Usage(message.into()),
        }
    }

    /// Fatal errors end the whole run. Sink errors only cost the artifact
    /// they were producing.
    pub fn is_fatal(&self) -> bool {
        match self.kind {
            ErrorKind::Usage(_)
            | ErrorKind::PayloadParse(_)
            | ErrorKind::ClientBuild(_)
            | ErrorKind::Transport { .. } => true,
            ErrorKind::LogDirectory { .. }
            | ErrorKind::LogWrite { .. }
            | ErrorKind::ChartRender { .. } => false,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Usage(_) | ErrorKind::PayloadParse(_) => None,
            ErrorKind::ClientBuild(e) => Some(e),
            ErrorKind::Transport { source, .. } => Some(source),
            ErrorKind::LogDirectory { source, .. }
            | ErrorKind::LogWrite { source, .. }
            | ErrorKind::ChartRender { source, .. } => Some(source),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match &self.kind {
            ErrorKind::Usage(message) => f.write_str(message),
            ErrorKind::PayloadParse(entry) => f.write_fmt(format_args!(
                "the argument '{}' is null or has syntax errors, expected key=value",
                entry
            )),
            ErrorKind::ClientBuild(e) => {
                f.write_fmt(format_args!("could not build http client: {}", e))
            }
            ErrorKind::Transport {
                method,
                url,
                source,
            } => f.write_fmt(format_args!("{} {} failed: {}", method, url, source)),
            ErrorKind::LogDirectory { path, source } => f.write_fmt(format_args!(
                "can't create logs dir {}: {}",
                path.display(),
                source
            )),
            ErrorKind::LogWrite { path, source } => f.write_fmt(format_args!(
                "log file's error - {}: {}",
                path.display(),
                source
            )),
            ErrorKind::ChartRender { path, source } => f.write_fmt(format_args!(
                "chart generation error - {}: {}",
                path.display(),
                source
            )),
        }
    }
}
