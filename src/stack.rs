//! Scoped handle for the platform sockets subsystem.
//!
//! `std` starts the platform socket subsystem lazily on first socket
//! creation (WSAStartup on Windows). [`NetStack::init`] forces that startup
//! with a probe socket so a refused subsystem surfaces before the real
//! endpoint opens, and the guard keeps the init/teardown accounting explicit
//! for the duration of a run.

use std::sync::atomic::{AtomicUsize, Ordering};

use socket2::{Domain, Protocol, Socket, Type};
use tracing::debug;

use crate::error::{Result, SenderError};

static STACK_REFS: AtomicUsize = AtomicUsize::new(0);

/// Owned reference to the initialized sockets subsystem.
///
/// Socket operations require a live guard. Guards nest; the count reaching
/// zero marks the subsystem released.
#[derive(Debug)]
pub struct NetStack(());

impl NetStack {
    /// Acquires the sockets subsystem, probing it on first acquisition.
    pub fn init() -> Result<Self> {
        let prev = STACK_REFS.fetch_add(1, Ordering::SeqCst);
        if prev == 0 {
            if let Err(err) = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)) {
                STACK_REFS.fetch_sub(1, Ordering::SeqCst);
                return Err(SenderError::stack_init(err));
            }
        }
        debug!(refs = prev + 1, "network stack acquired");
        Ok(Self(()))
    }

    /// Live references held across the process. Zero means released.
    pub fn active() -> usize {
        STACK_REFS.load(Ordering::SeqCst)
    }
}

impl Drop for NetStack {
    fn drop(&mut self) {
        let prev = STACK_REFS.fetch_sub(1, Ordering::SeqCst);
        debug!(refs = prev - 1, "network stack released");
    }
}

// Tests that assert on the process-wide refcount take this lock so runs
// in parallel test threads cannot interleave their counts.
#[cfg(test)]
pub(crate) static TEST_SERIAL: std::sync::Mutex<()> = std::sync::Mutex::new(());
