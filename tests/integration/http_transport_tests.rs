use bugrepo::BugError;
use bugrepo::config::HttpConfig;
use bugrepo::transport::HttpTransport;
use bugrepo::transport::Transport;
use httpmock::prelude::*;
use serde_json::json;

use crate::fixture::transport_for;

#[test]
fn get_decodes_json_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/latest/bug/7")
            .header("Accept", "application/json");
        then.status(200).json_body(json!({"id": 7, "summary": "crash"}));
    });

    let value = transport_for(&server).get("/latest/bug/7").unwrap();

    mock.assert();
    assert_eq!(value["summary"], "crash");
}

#[test]
fn get_404_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("no such record");
    });

    let err = transport_for(&server).get("/missing").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn get_other_status_carries_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/busy");
        then.status(503).body("try later");
    });

    let err = transport_for(&server).get("/busy").unwrap_err();
    assert!(matches!(err, BugError::Transport { status: 503, ref path } if path == "/busy"));
}

#[test]
fn get_invalid_json_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/html");
        then.status(200).body("<html>oops</html>");
    });

    let err = transport_for(&server).get("/html").unwrap_err();
    assert!(matches!(err, BugError::MalformedResponse(_)));
}

#[test]
fn get_invalid_utf8_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest/bug/3");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(b"{\"summary\":\"caf\xff\"}");
    });

    let err = transport_for(&server).get("/latest/bug/3").unwrap_err();
    assert!(matches!(err, BugError::MalformedResponse(_)));
}

#[test]
fn delete_ignores_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/record/1");
        then.status(200).body("not json at all");
    });

    transport_for(&server).delete("/record/1").unwrap();
    mock.assert();
}

#[test]
fn delete_404_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/record/1");
        then.status(404);
    });

    let err = transport_for(&server).delete("/record/1").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn unreachable_host_is_network_error() {
    // Nothing listens on the tcpmux port.
    let transport = HttpTransport::new("http://127.0.0.1:1", &HttpConfig::default()).unwrap();

    let err = transport.get("/anything").unwrap_err();
    assert!(matches!(err, BugError::Network(_)));
}
