use crate::error::{Error, ErrorKind};
use crate::http_client::{ClientConfig, HttpClient};
use crate::model::{Headers, Method, Request, ResultRecord};
use crate::payload::parse_payload;
use chrono::Local;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;
use serde_json::{Map, Value};
use std::time::Instant;

pub struct ReqwestHttpClient {
    client: Client,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> Result<ReqwestHttpClient, Error>
    where
        Self: Sized,
    {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| Error {
                kind: ErrorKind::ClientBuild(e),
            })?;

        Ok(ReqwestHttpClient { client })
    }

    fn execute(&self, request: &Request) -> Result<ResultRecord, Error> {
        let Request {
            method,
            url,
            payload,
        } = request;

        // the payload is validated before anything goes on the wire
        let mut request_builder = self.client.request((*method).into(), url.as_str());
        if method.accepts_payload() {
            request_builder = set_body(parse_payload(payload.as_slice())?, request_builder);
        }

        let start_time = Local::now();
        let started = Instant::now();
        let response = request_builder
            .send()
            .map_err(|source| transport_failure(request, source))?;

        let status = response.status();
        let protocol = format!("{:?}", response.version());
        let headers = collect_headers(response.headers());
        let body = if method.reads_body() {
            response
                .text()
                .map_err(|source| transport_failure(request, source))?
        } else {
            drop(response);
            String::new()
        };
        let elapsed = started.elapsed();

        log::debug!(
            "{} {} answered {} in {:?}",
            method,
            url,
            status.as_u16(),
            elapsed
        );

        Ok(ResultRecord {
            url: url.clone(),
            method: *method,
            start_time,
            response_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            protocol,
            headers,
            body,
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

fn transport_failure(request: &Request, source: reqwest::Error) -> Error {
    Error {
        kind: ErrorKind::Transport {
            method: request.method,
            url: request.url.clone(),
            source,
        },
    }
}

fn collect_headers(value: &HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (header_name, header_value) in value.iter() {
        headers
            .entry(header_name.to_string())
            .or_default()
            .push(String::from_utf8_lossy(header_value.as_bytes()).into_owned());
    }
    headers
}

fn set_body(body: Map<String, Value>, request_builder: RequestBuilder) -> RequestBuilder {
    request_builder.json(&body)
}
