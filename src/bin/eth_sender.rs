//! Sends the fixed FPGA test datagram to the built-in destination.
//!
//! Takes no arguments; exits nonzero if any step fails.

use anyhow::Result;
use eth_sender::{send_once, SenderConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let report = send_once(&SenderConfig::default())?;
    println!("sent {} bytes to {}", report.bytes_sent, report.dest);

    Ok(())
}
