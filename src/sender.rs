//! The one-shot datagram send path.

use std::net::SocketAddrV4;

use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use tracing::{info, warn};

use crate::config::SenderConfig;
use crate::error::{Result, SenderError};
use crate::stack::NetStack;

/// One connectionless IPv4/UDP socket.
///
/// Opening requires a live [`NetStack`] guard. The socket stays unbound;
/// the stack assigns an ephemeral local port at first send. The platform
/// socket is released on drop.
pub struct Endpoint {
    sock: Socket,
}

impl Endpoint {
    pub fn open(_stack: &NetStack) -> Result<Self> {
        let sock = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
            .map_err(SenderError::socket_create)?;
        Ok(Self { sock })
    }

    /// Sends `payload` as a single datagram, returning the bytes accepted.
    ///
    /// A short write counts as a failure: the payload must go out whole or
    /// not at all.
    pub fn send_to(&self, payload: &[u8], dest: SocketAddrV4) -> Result<usize> {
        let addr = SockAddr::from(dest);
        let n = self
            .sock
            .send_to(payload, &addr)
            .map_err(SenderError::send)?;
        if n != payload.len() {
            warn!(accepted = n, expected = payload.len(), "short send");
            return Err(SenderError::short_send(n, payload.len()));
        }
        Ok(n)
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReport {
    pub dest: SocketAddrV4,
    pub bytes_sent: usize,
}

/// Runs the full sequence: acquire stack, open endpoint, resolve
/// destination, transmit, release.
///
/// Cleanup is positional: the endpoint closes before the stack reference
/// drops on every exit path, and a failure after acquisition still releases
/// whatever is owed at that point.
pub fn send_once(config: &SenderConfig) -> Result<SendReport> {
    let stack = NetStack::init()?;
    info!("network stack initialised");

    let endpoint = Endpoint::open(&stack)?;
    info!("socket created");

    let dest = config.dest()?;
    info!(%dest, "destination resolved");

    let bytes_sent = endpoint.send_to(&config.payload, dest)?;
    info!(bytes_sent, "datagram sent");

    Ok(SendReport { dest, bytes_sent })
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;

    use super::*;
    use crate::stack::TEST_SERIAL;

    #[test]
    fn endpoint_sends_whole_payload() {
        let _serial = TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner());

        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let dest = match receiver.local_addr().unwrap() {
            std::net::SocketAddr::V4(v4) => v4,
            other => panic!("loopback bind returned {other}"),
        };

        let stack = NetStack::init().unwrap();
        let endpoint = Endpoint::open(&stack).unwrap();
        let sent = endpoint.send_to(b"ping", dest).unwrap();
        assert_eq!(sent, 4);

        let mut buf = [0u8; 64];
        let (n, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"ping");
    }

    #[test]
    fn parse_failure_happens_before_any_send() {
        let _serial = TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        let before = NetStack::active();

        let config = SenderConfig {
            dest_addr: "999.0.0.1".to_string(),
            ..SenderConfig::default()
        };
        let err = send_once(&config).unwrap_err();
        assert!(matches!(err, SenderError::AddressParse { .. }));

        // Both the endpoint and the stack reference are released.
        assert_eq!(NetStack::active(), before);
    }

    #[test]
    fn run_releases_stack_reference() {
        let _serial = TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        let before = NetStack::active();

        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = receiver.local_addr().unwrap();
        let config = SenderConfig {
            dest_addr: addr.ip().to_string(),
            dest_port: addr.port(),
            ..SenderConfig::default()
        };

        let report = send_once(&config).unwrap();
        assert_eq!(report.bytes_sent, config.payload.len());
        assert_eq!(NetStack::active(), before);
    }
}
