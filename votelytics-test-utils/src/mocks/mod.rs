//! Mock implementations at the client's two seams: the transport and the
//! cache's backing store, plus a manual clock for TTL tests.

mod clock;
mod store;
mod transport;

pub use clock::ManualClock;
pub use store::FailingStore;
pub use transport::{FailingTransport, MockTransport};
