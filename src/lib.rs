//! One-shot UDP test-message sender for poking an FPGA listener.

use bytes::Bytes;

pub mod config;
pub mod error;
pub mod sender;
pub mod stack;

pub use config::SenderConfig;
pub use error::{Result, SenderError};
pub use sender::{send_once, Endpoint, SendReport};
pub use stack::NetStack;

/// Destination the FPGA listener is expected on.
pub const DEST_ADDR: &str = "192.0.2.146";
pub const DEST_PORT: u16 = 5005;

/// The one datagram this tool ever sends.
pub const TEST_MESSAGE: &[u8] = b"FPGA test message";

pub fn test_payload() -> Bytes {
    Bytes::from_static(TEST_MESSAGE)
}
