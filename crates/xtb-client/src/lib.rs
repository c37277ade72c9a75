//! Low-level XTB xStation API client.
//!
//! This crate owns the vendor boundary: the blocking JSON-over-TCP
//! [`Transport`], the [`ApiClient`] command surface with its single dispatch
//! funnel, the raw wire records, and the [`StreamingClient`] that pushes
//! subscription payloads to caller-supplied callbacks from a background
//! reader thread.

mod api;
mod stream;
mod transport;
pub mod wire;

pub use api::ApiClient;
pub use stream::{StreamHandle, StreamingClient};
pub use transport::{
    TcpTransport, Transport, DEMO_PORT, DEMO_STREAMING_PORT, REAL_PORT, REAL_STREAMING_PORT,
    XAPI_ADDRESS,
};
