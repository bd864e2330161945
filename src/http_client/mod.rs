use crate::error::Error;
use crate::model::{Request, ResultRecord};


pub mod reqwest;

pub struct ClientConfig {
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("please/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

/// One timed round-trip per call. Every status code is a successful
/// [`ResultRecord`]; only failures to get a response at all are errors.
pub trait HttpClient {
    fn create(config: ClientConfig) -> Result<Self, Error>
    where
        Self: Sized;

    fn execute(&self, request: &Request) -> Result<ResultRecord, Error>;
}
