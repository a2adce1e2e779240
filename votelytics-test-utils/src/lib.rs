//! Test utilities for the Votelytics client
//!
//! Mock transports and stores for exercising the cache and API access layer
//! without a backend, plus builders for realistic election test data.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestDataBuilder;
pub use mocks::{FailingStore, FailingTransport, ManualClock, MockTransport};
