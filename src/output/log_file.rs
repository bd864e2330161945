use crate::error::{Error, ErrorKind};
use crate::model::{Request, ResultRecord};
use crate::output::LogSink;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const SINGLE_LOG_FILE: &str = "log.json";
pub const LOG_DIR: &str = "logs";

/// Writes one JSON document per attempt under `root`: `log.json` for a single
/// run, `logs/log<attempt>.json` when the request is repeated.
pub struct LogWriter {
    root: PathBuf,
}

#[derive(Serialize)]
struct LogDocument<'a> {
    url: &'a str,
    #[serde(rename = "start-time")]
    start_time: String,
    time: String,
    #[serde(rename = "request-type")]
    request_type: &'static str,
    #[serde(rename = "status-code")]
    status_code: String,
    response: Value,
}

impl LogWriter {
    pub fn new(root: &Path) -> LogWriter {
        LogWriter {
            root: root.to_path_buf(),
        }
    }

    pub fn log_path(&self, repetitions: usize, attempt: usize) -> PathBuf {
        if repetitions == 1 {
            self.root.join(SINGLE_LOG_FILE)
        } else {
            self.root.join(LOG_DIR).join(format!("log{}.json", attempt))
        }
    }
}

// A body that is valid JSON is embedded as is, anything else as a string.
fn response_value(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

impl LogSink for LogWriter {
    fn write(
        &self,
        request: &Request,
        record: &ResultRecord,
        repetitions: usize,
        attempt: usize,
    ) -> Result<usize, Error> {
        let path = self.log_path(repetitions, attempt);

        if repetitions != 1 {
            let dir = self.root.join(LOG_DIR);
            std::fs::create_dir_all(&dir).map_err(|source| Error {
                kind: ErrorKind::LogDirectory { path: dir, source },
            })?;
        }

        let document = LogDocument {
            url: &request.url,
            start_time: record.formatted_start_time(),
            time: format!("{} ms", record.response_time_ms),
            request_type: request.method.as_str(),
            status_code: record.status(),
            response: response_value(&record.body),
        };

        let contents = serde_json::to_vec_pretty(&document)
            .map_err(std::io::Error::from)
            .and_then(|contents| std::fs::write(&path, &contents).map(|_| contents.len()));

        contents.map_err(|source| Error {
            kind: ErrorKind::LogWrite { path, source },
        })
    }
}
