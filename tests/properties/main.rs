//! Property tests for record addressing and value handling.

mod record_tests;
