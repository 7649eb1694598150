//! Integration tests against a local mock HTTP server.

mod http_transport_tests;
mod lily_cascade_tests;
mod read_backend_tests;
