use std::net::{Ipv4Addr, SocketAddrV4};

use bytes::Bytes;

use crate::error::{Result, SenderError};
use crate::{test_payload, DEST_ADDR, DEST_PORT};

/// Where and what to send.
///
/// Defaults reproduce the fixed FPGA test shot; tests substitute a loopback
/// receiver.
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Dotted-quad IPv4 literal.
    pub dest_addr: String,
    pub dest_port: u16,
    pub payload: Bytes,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            dest_addr: DEST_ADDR.to_string(),
            dest_port: DEST_PORT,
            payload: test_payload(),
        }
    }
}

impl SenderConfig {
    /// Builds the destination descriptor, rejecting malformed literals.
    pub fn dest(&self) -> Result<SocketAddrV4> {
        let ip: Ipv4Addr =
            self.dest_addr
                .parse()
                .map_err(|source| SenderError::AddressParse {
                    addr: self.dest_addr.clone(),
                    source,
                })?;
        Ok(SocketAddrV4::new(ip, self.dest_port))
    }
}
