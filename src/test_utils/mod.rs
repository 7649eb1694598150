//! Shared test utilities for bugrepo.

pub mod fixtures;
pub mod mock_transport;

pub use mock_transport::{MockTransport, RecordedRequest};
