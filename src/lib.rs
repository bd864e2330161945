//! # please
//!
//! please is a small HTTP client for the command line. It fires one request,
//! or the same request several times in a row, and prints a colored summary
//! of every response: start time, protocol, status, response time, headers
//! and body.
//!
//! ## Usage
//!
//! ```text,no_run
//! $ please get https://httpbin.org/get
//! $ please post https://httpbin.org/post foo=bar id=42
//! $ please --repeat 5 --gen-chart --log get https://httpbin.org/get
//! ```
//!
//! `post`, `put` and `patch` turn their `key=value` arguments into a JSON
//! object body. `--log` writes `log.json` (or `logs/log<n>.json` when the
//! request is repeated) and `--gen-chart` renders the response times of a
//! repeated request to `stats.html`.
//!
//! See `please --help` for every flag.
//!
//! ## Library
//!
//! ```no_run
//! use please::{ClientConfig, ColoredOutputter, Method, Request, RunOptions, Runtime};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), please::Error> {
//! let mut stdout = std::io::stdout();
//! let mut outputter = ColoredOutputter::new(&mut stdout, false);
//! let mut runtime = Runtime::new(&mut outputter, ClientConfig::default(), Path::new("."))?;
//!
//! let request = Request::new(Method::Get, "https://httpbin.org/get", vec![]);
//! let report = runtime.run(&request, 3, RunOptions::default())?;
//! assert_eq!(report.latencies.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod http_client;
pub mod model;
pub mod output;
pub mod payload;
pub mod runtime;

pub type Result<T> = anyhow::Result<T>;

pub use error::{Error, ErrorKind};
pub use http_client::ClientConfig;
pub use model::{Method, Request, ResultRecord};
pub use output::print::ColoredOutputter;
pub use runtime::{RunOptions, RunReport, Runtime};
