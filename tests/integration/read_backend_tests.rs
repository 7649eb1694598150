use bugrepo::BugError;
use bugrepo::repo::lily::master_path;
use bugrepo::repo::{BugRepository, BzapiRepo, LilyRepo, SolrRepo};
use bugrepo::test_utils::fixtures::lily_record;
use httpmock::prelude::*;
use serde_json::json;

use crate::fixture::{record_path_regex, transport_for};

#[test]
fn bzapi_get_returns_record() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest/bug/42");
        then.status(200)
            .json_body(json!({"id": 42, "status": "NEW", "summary": "crash"}));
    });

    let bug = BzapiRepo::new(transport_for(&server)).get(42).unwrap().unwrap();
    assert_eq!(bug.id().as_deref(), Some("42"));
    assert_eq!(bug.get("status"), Some(&json!("NEW")));
}

#[test]
fn bzapi_unknown_bug_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latest/bug/42");
        then.status(404).json_body(json!({"error": true, "message": "not found"}));
    });

    assert_eq!(BzapiRepo::new(transport_for(&server)).get(42).unwrap(), None);
}

#[test]
fn solr_get_sends_unexpired_filter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/solr/select/")
            .query_param("q", "bug_id:42 expiration_date:[NOW TO *]")
            .query_param("rows", "1")
            .query_param("wt", "json");
        then.status(200).json_body(json!({
            "response": {"numFound": 1, "docs": [{"bug_id": 42, "bug_status": "RESOLVED"}]}
        }));
    });

    let bug = SolrRepo::new(transport_for(&server)).get(42).unwrap().unwrap();

    mock.assert();
    assert_eq!(bug.get("id"), Some(&json!(42)));
    assert_eq!(bug.get("bug_status"), Some(&json!("RESOLVED")));
}

#[test]
fn solr_no_docs_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/solr/select/");
        then.status(200)
            .json_body(json!({"response": {"numFound": 0, "docs": []}}));
    });

    assert_eq!(SolrRepo::new(transport_for(&server)).get(42).unwrap(), None);
}

#[test]
fn lily_get_unqualifies_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master_path(42), ""));
        then.status(200).json_body(lily_record(
            "ns1",
            json!({"ns1$bug_id": 42, "ns1$bug_status": "NEW", "ns9$other": 1}),
        ));
    });

    let bug = LilyRepo::new(transport_for(&server)).get(42).unwrap().unwrap();
    assert_eq!(bug.get("bug_id"), Some(&json!(42)));
    assert_eq!(bug.get("bug_status"), Some(&json!("NEW")));
    assert_eq!(bug.get("other"), None);
}

#[test]
fn read_only_backends_refuse_delete() {
    let server = MockServer::start();
    let transport = transport_for(&server);

    let err = BzapiRepo::new(&transport).delete(1).unwrap_err();
    assert!(matches!(err, BugError::Unsupported { backend: "bzapi", .. }));
    let err = SolrRepo::new(&transport).delete(1).unwrap_err();
    assert!(matches!(err, BugError::Unsupported { backend: "solr", .. }));
}
