pub mod chart;
pub mod log_file;
pub mod print;


use crate::error::Error;
use crate::model::{Request, ResultRecord};
use crate::Result;
use std::path::PathBuf;

fn prettify_response_body(body: &str) -> String {
    match serde_json::from_str(body) {
        Ok(serde_json::Value::Object(response_body)) => {
            serde_json::to_string_pretty(&response_body).unwrap_or_else(|_| String::from(body))
        }
        _ => String::from(body),
    }
}

/// Console side of a run: every result, plus the short notices and
/// diagnostics the runtime emits between them.
pub trait Outputter {
    fn result(&mut self, record: &ResultRecord) -> Result<()>;
    fn notice(&mut self, message: &str) -> Result<()>;
    fn diagnostic(&mut self, message: &str) -> Result<()>;
}

/// Persists one attempt. `repetitions` and `attempt` (1-based) decide where
/// the document lands. Returns the number of bytes written.
pub trait LogSink {
    fn write(
        &self,
        request: &Request,
        record: &ResultRecord,
        repetitions: usize,
        attempt: usize,
    ) -> std::result::Result<usize, Error>;
}

/// Renders the latency of every attempt, in attempt order. Returns the path
/// of the produced artifact.
pub trait ChartSink {
    fn render(&self, latencies: &[u64], repetitions: usize)
        -> std::result::Result<PathBuf, Error>;
}
