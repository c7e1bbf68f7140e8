use std::io;
use std::net::AddrParseError;

use thiserror::Error;

pub type Result<T, E = SenderError> = core::result::Result<T, E>;

/// Failures of the one-shot send. Variants for platform calls carry the
/// OS diagnostic code alongside the underlying error.
#[derive(Debug, Error)]
pub enum SenderError {
    #[error("network stack init failed, error code {code}")]
    StackInit { code: i32, source: io::Error },
    #[error("socket creation failed, error code {code}")]
    SocketCreate { code: i32, source: io::Error },
    #[error("invalid destination address {addr:?}")]
    AddressParse {
        addr: String,
        source: AddrParseError,
    },
    #[error("send failed, error code {code}")]
    Send { code: i32, source: io::Error },
}

impl SenderError {
    pub(crate) fn stack_init(source: io::Error) -> Self {
        let code = os_code(&source);
        Self::StackInit { code, source }
    }

    pub(crate) fn socket_create(source: io::Error) -> Self {
        let code = os_code(&source);
        Self::SocketCreate { code, source }
    }

    pub(crate) fn send(source: io::Error) -> Self {
        let code = os_code(&source);
        Self::Send { code, source }
    }

    pub(crate) fn short_send(sent: usize, expected: usize) -> Self {
        Self::send(io::Error::new(
            io::ErrorKind::WriteZero,
            format!("{sent} of {expected} payload bytes accepted"),
        ))
    }

    /// Platform diagnostic code, where the failing call produced one.
    /// Non-OS failures (e.g. a short send) report -1.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::StackInit { code, .. }
            | Self::SocketCreate { code, .. }
            | Self::Send { code, .. } => Some(*code),
            Self::AddressParse { .. } => None,
        }
    }
}

fn os_code(err: &io::Error) -> i32 {
    err.raw_os_error().unwrap_or(-1)
}
