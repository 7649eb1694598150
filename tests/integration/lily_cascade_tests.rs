use bugrepo::BugError;
use bugrepo::repo::lily::{LilyRepo, master_path};
use bugrepo::test_utils::fixtures::{version_entry, version_listing};
use httpmock::prelude::*;
use serde_json::json;

use crate::fixture::{record_path_regex, transport_for};

const LISTING_SUFFIX: &str = "/version";

#[test]
fn deletes_every_version_then_master() {
    let server = MockServer::start();
    let master = master_path(42);

    let listing = server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, LISTING_SUFFIX))
            .query_param("max-results", "2147483647")
            .query_param("ns.betl", "com.mozilla.bugzilla_etl")
            .query_param("fields", "betl$modification_date");
        then.status(200).json_body(version_listing(vec![
            version_entry("n1", "1970-01-12T13:46:40Z"),
            version_entry("n2", "1970-01-12T13:46:50.000+0000"),
        ]));
    });
    let first_probe = server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, "1000000000"));
        then.status(200).json_body(json!({"id": "USER.240000#1000000000"}));
    });
    let second_probe = server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, "1000010000"));
        then.status(200).json_body(json!({"id": "USER.240000#1000010000"}));
    });
    let first_delete = server.mock(|when, then| {
        when.method(DELETE)
            .path_matches(record_path_regex(&master, "1000000000"));
        then.status(200);
    });
    let second_delete = server.mock(|when, then| {
        when.method(DELETE)
            .path_matches(record_path_regex(&master, "1000010000"));
        then.status(200);
    });
    let master_delete = server.mock(|when, then| {
        when.method(DELETE).path_matches(record_path_regex(&master, ""));
        then.status(200);
    });

    let report = LilyRepo::new(transport_for(&server))
        .cascade_delete(42)
        .unwrap();

    listing.assert();
    first_probe.assert();
    second_probe.assert();
    first_delete.assert();
    second_delete.assert();
    master_delete.assert();
    assert_eq!(report.versions_listed, 2);
    assert_eq!(report.slaves_deleted, 2);
    assert!(report.master_deleted);
}

#[test]
fn absent_master_sends_no_deletes() {
    let server = MockServer::start();
    let master = master_path(7);

    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, LISTING_SUFFIX));
        then.status(404);
    });
    let any_delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(200);
    });

    let report = LilyRepo::new(transport_for(&server)).cascade_delete(7).unwrap();

    assert!(report.master_absent);
    assert_eq!(any_delete.hits(), 0);
}

#[test]
fn missing_slave_is_skipped() {
    let server = MockServer::start();
    let master = master_path(42);

    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, LISTING_SUFFIX));
        then.status(200).json_body(version_listing(vec![version_entry(
            "n1",
            "1970-01-12T13:46:40Z",
        )]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, "1000000000"));
        then.status(404);
    });
    let slave_delete = server.mock(|when, then| {
        when.method(DELETE)
            .path_matches(record_path_regex(&master, "1000000000"));
        then.status(200);
    });
    let master_delete = server.mock(|when, then| {
        when.method(DELETE).path_matches(record_path_regex(&master, ""));
        then.status(200);
    });

    let report = LilyRepo::new(transport_for(&server)).cascade_delete(42).unwrap();

    assert_eq!(slave_delete.hits(), 0);
    master_delete.assert();
    assert_eq!(report.slaves_missing, 1);
    assert!(report.master_deleted);
}

#[test]
fn slave_delete_404_after_probe_is_skipped() {
    let server = MockServer::start();
    let master = master_path(42);

    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, LISTING_SUFFIX));
        then.status(200).json_body(version_listing(vec![version_entry(
            "n1",
            "1970-01-12T13:46:40Z",
        )]));
    });
    let probe = server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, "1000000000"));
        then.status(200).json_body(json!({"id": "USER.240000#1000000000"}));
    });
    let slave_delete = server.mock(|when, then| {
        when.method(DELETE)
            .path_matches(record_path_regex(&master, "1000000000"));
        then.status(404);
    });
    let master_delete = server.mock(|when, then| {
        when.method(DELETE).path_matches(record_path_regex(&master, ""));
        then.status(200);
    });

    let report = LilyRepo::new(transport_for(&server)).cascade_delete(42).unwrap();

    probe.assert();
    slave_delete.assert();
    master_delete.assert();
    assert_eq!(report.slaves_deleted, 0);
    assert_eq!(report.slaves_missing, 1);
    assert!(report.master_deleted);
}

#[test]
fn listing_failure_aborts_before_any_delete() {
    let server = MockServer::start();
    let master = master_path(42);

    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, LISTING_SUFFIX));
        then.status(500).body("region server down");
    });
    let any_delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(200);
    });

    let err = LilyRepo::new(transport_for(&server)).cascade_delete(42).unwrap_err();

    assert!(matches!(err, BugError::Transport { status: 500, .. }));
    assert_eq!(any_delete.hits(), 0);
}

#[test]
fn unparseable_modification_date_aborts() {
    let server = MockServer::start();
    let master = master_path(42);

    server.mock(|when, then| {
        when.method(GET)
            .path_matches(record_path_regex(&master, LISTING_SUFFIX));
        then.status(200)
            .json_body(version_listing(vec![version_entry("n1", "last tuesday")]));
    });
    let any_delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(200);
    });

    let err = LilyRepo::new(transport_for(&server)).cascade_delete(42).unwrap_err();

    assert!(matches!(err, BugError::InvalidDate(_)));
    assert_eq!(any_delete.hits(), 0);
}
