use crate::common::{read_json, DebugWriter};
use httpmock::MockServer;
use please::{ClientConfig, ColoredOutputter, ErrorKind, Method, Request, RunOptions, Runtime};
use serde_json::json;

mod common;

#[test]
fn simple_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/simple_get");
        then.status(200)
            .header("x-request-id", "30")
            .body(r#"{"value": true}"#);
    });
    let dir = tempfile::tempdir().unwrap();

    let writer = &mut DebugWriter(String::new());
    let mut outputter = ColoredOutputter::new(writer, false);
    let mut runtime =
        Runtime::new(&mut outputter, ClientConfig::default(), dir.path()).unwrap();

    let request = Request::new(Method::Get, server.url("/simple_get"), vec![]);
    let report = runtime.run(&request, 1, RunOptions::default()).unwrap();

    mock.assert();
    assert_eq!(report.latencies.len(), 1);
    assert_eq!(report.chart, None);
    assert!(!dir.path().join("log.json").exists());

    let DebugWriter(buf) = writer;
    assert!(buf.contains("- Protocol: HTTP/1.1\n"));
    assert!(buf.contains("- Status: 200 OK\n"));
    assert!(buf.contains(&format!("- Time: {} ms\n", report.latencies[0])));
    assert!(buf.contains("  x-request-id: 30\n"));
    assert!(buf.contains("- Response:\n{\n  \"value\": true\n}\n"));
}

#[test]
fn simple_post_with_log() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/simple_post")
            .header("Content-Type", "application/json")
            .json_body(json!({"key1": "value1", "key2": "value2"}));
        then.status(201).body(r#"{"created": true}"#);
    });
    let dir = tempfile::tempdir().unwrap();

    let writer = &mut DebugWriter(String::new());
    let mut outputter = ColoredOutputter::new(writer, false);
    let mut runtime =
        Runtime::new(&mut outputter, ClientConfig::default(), dir.path()).unwrap();

    let request = Request::new(
        Method::Post,
        server.url("/simple_post"),
        vec!["key1=value1".to_string(), "key2=value2".to_string()],
    );
    let options = RunOptions {
        emit_log: true,
        emit_chart: true,
    };
    let report = runtime.run(&request, 1, options).unwrap();

    mock.assert();
    assert_eq!(report.chart, None);
    assert!(!dir.path().join("stats.html").exists());

    let log = read_json(&dir.path().join("log.json"));
    assert_eq!(log["url"], json!(server.url("/simple_post")));
    assert_eq!(log["request-type"], json!("POST"));
    assert_eq!(log["status-code"], json!("201 Created"));
    assert_eq!(log["time"], json!(format!("{} ms", report.latencies[0])));
    assert_eq!(log["response"], json!({"created": true}));

    let DebugWriter(buf) = writer;
    assert!(buf.contains("- Log file generated successfully.\n"));
    assert!(buf.contains("please: chart generation error: there must be at least 2 repetitions."));
}

#[test]
fn unreachable_server_fails() {
    let dir = tempfile::tempdir().unwrap();
    let writer = &mut DebugWriter(String::new());
    let mut outputter = ColoredOutputter::new(writer, false);
    let mut runtime =
        Runtime::new(&mut outputter, ClientConfig::default(), dir.path()).unwrap();

    let request = Request::new(Method::Get, "http://127.0.0.1:1/", vec![]);
    let options = RunOptions {
        emit_log: true,
        emit_chart: true,
    };
    let err = runtime.run(&request, 3, options).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Transport { .. }));
    assert!(!dir.path().join("logs").exists());
    assert!(!dir.path().join("stats.html").exists());

    let DebugWriter(buf) = writer;
    assert!(buf.is_empty());
}

#[test]
fn malformed_payload_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.path("/patch");
        then.status(200);
    });
    let dir = tempfile::tempdir().unwrap();
    let writer = &mut DebugWriter(String::new());
    let mut outputter = ColoredOutputter::new(writer, false);
    let mut runtime =
        Runtime::new(&mut outputter, ClientConfig::default(), dir.path()).unwrap();

    let request = Request::new(
        Method::Patch,
        server.url("/patch"),
        vec!["no-separator".to_string()],
    );
    let err = runtime.run(&request, 2, RunOptions::default()).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::PayloadParse(_)));
    assert_eq!(mock.hits(), 0);
}
