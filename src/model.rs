use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Format used whenever a start time is shown to the user or written to a log.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Head,
        Method::Options,
    ];

    /// Whether the request carries the `key=value` payload as a JSON body.
    pub fn accepts_payload(self) -> bool {
        match self {
            Method::Post | Method::Put | Method::Patch => true,
            Method::Get | Method::Delete | Method::Head | Method::Options => false,
        }
    }

    /// Whether the response body is drained and kept. HEAD and OPTIONS stop at
    /// the status line and headers.
    pub fn reads_body(self) -> bool {
        !matches!(self, Method::Head | Method::Options)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error {
                kind: ErrorKind::Usage(format!("unknown request type '{}'", s)),
            })
    }
}

/// What the user asked for: one method against one URL with its raw
/// `key=value` arguments.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub payload: Vec<String>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>, payload: Vec<String>) -> Request {
        Request {
            method,
            url: url.into(),
            payload,
        }
    }
}

/// Header name to every value the server sent for it, in arrival order.
pub type Headers = BTreeMap<String, Vec<String>>;

/// The outcome of one successful round-trip. Any status code, 4xx and 5xx
/// included, produces a record; transport failures never do.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub url: String,
    pub method: Method,
    pub start_time: DateTime<Local>,
    pub response_time_ms: u64,
    pub status_code: u16,
    pub status_text: String,
    pub protocol: String,
    pub headers: Headers,
    pub body: String,
}

impl ResultRecord {
    /// Status line as servers print it, e.g. `200 OK`.
    pub fn status(&self) -> String {
        if self.status_text.is_empty() {
            self.status_code.to_string()
        } else {
            format!("{} {}", self.status_code, self.status_text)
        }
    }

    pub fn formatted_start_time(&self) -> String {
        self.start_time.format(START_TIME_FORMAT).to_string()
    }
}
