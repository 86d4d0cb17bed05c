mod client;
mod transport;

// Mock transport for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

pub use client::{HiscoresClient, check_response};
pub use transport::{HiscoresResponse, HiscoresTransport, ReqwestTransport};

#[doc(hidden)]
pub use mock::{MockTransport, RecordedRequest};
