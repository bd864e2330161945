use crate::common::{read_json, DebugWriter};
use httpmock::MockServer;
use please::{ClientConfig, ColoredOutputter, Method, Request, RunOptions, Runtime};
use serde_json::json;

mod common;

#[test]
fn multi_get_with_logs_and_chart() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/multi_get");
        then.status(404).body("missing");
    });
    let dir = tempfile::tempdir().unwrap();

    let writer = &mut DebugWriter(String::new());
    let mut outputter = ColoredOutputter::new(writer, false);
    let mut runtime =
        Runtime::new(&mut outputter, ClientConfig::default(), dir.path()).unwrap();

    let request = Request::new(Method::Get, server.url("/multi_get"), vec![]);
    let options = RunOptions {
        emit_log: true,
        emit_chart: true,
    };
    let report = runtime.run(&request, 3, options).unwrap();

    assert_eq!(mock.hits(), 3);
    assert_eq!(report.latencies.len(), 3);
    assert_eq!(report.chart, Some(dir.path().join("stats.html")));
    assert!(!dir.path().join("log.json").exists());

    for (index, latency) in report.latencies.iter().enumerate() {
        let log = read_json(
            &dir.path()
                .join("logs")
                .join(format!("log{}.json", index + 1)),
        );
        assert_eq!(log["url"], json!(server.url("/multi_get")));
        assert_eq!(log["request-type"], json!("GET"));
        assert_eq!(log["status-code"], json!("404 Not Found"));
        assert_eq!(log["time"], json!(format!("{} ms", latency)));
        assert_eq!(log["response"], json!("missing"));
    }

    let chart = std::fs::read_to_string(dir.path().join("stats.html")).unwrap();
    for label in ["response 1", "response 2", "response 3"] {
        assert!(chart.contains(label));
    }
    assert!(!chart.contains("response 4"));

    let DebugWriter(buf) = writer;
    assert_eq!(buf.matches("- Status: 404 Not Found\n").count(), 3);
    assert_eq!(buf.matches("- Log file generated successfully.\n").count(), 3);
    assert_eq!(buf.matches("- Chart generated successfully.\n").count(), 1);
}

#[test]
fn multi_put_with_empty_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::PUT)
            .path("/multi_put")
            .json_body(json!({}));
        then.status(200);
    });
    let dir = tempfile::tempdir().unwrap();

    let writer = &mut DebugWriter(String::new());
    let mut outputter = ColoredOutputter::new(writer, false);
    let mut runtime =
        Runtime::new(&mut outputter, ClientConfig::default(), dir.path()).unwrap();

    let request = Request::new(Method::Put, server.url("/multi_put"), vec![String::new()]);
    let report = runtime.run(&request, 2, RunOptions::default()).unwrap();

    assert_eq!(mock.hits(), 2);
    assert_eq!(report.latencies.len(), 2);
    assert!(!dir.path().join("logs").exists());
    assert!(!dir.path().join("stats.html").exists());
}
