//! netsnap - a point-in-time network interface report for Linux
//!
//! This crate inspects the host's network interfaces and reports, per
//! interface, the IPv4 configuration (address, netmask, broadcast), the MTU,
//! and the cumulative receive/transmit byte counters maintained by the
//! kernel, rendered as human-readable sizes. It takes one snapshot and
//! exits; it is a diagnostic, not a monitor.
//!
//! Two independent pipelines make up a report:
//!
//! - **Interfaces**: enumerate interfaces with `getifaddrs()`, resolve the
//!   IPv4 configuration for each, and query the MTU (device ioctl first,
//!   sysfs fallback).
//! - **Traffic**: parse the per-interface counter table the kernel exposes
//!   at `/proc/net/dev`.
//!
//! No data flows between the pipelines; a failure in one never stops the
//! other. All kernel queries are read-only.
//!
//! # Examples
//!
//! ```no_run
//! use netsnap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = Config::default();
//!     let palette = Palette::new(config.color);
//!     let mut out = std::io::stdout().lock();
//!
//!     interface_report(&mut out, &config, palette)?;
//!     traffic_report(&mut out, &config, palette)?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Expected absences are values, not errors: an interface without an IPv4
//! binding reports `None` for each address field, and an MTU that cannot be
//! retrieved by either method reports `None`. `Error` is reserved for
//! failures of the pipelines themselves (a failed `getifaddrs()` call, an
//! unreadable statistics table).

pub mod config;
pub mod error;
pub mod format;
pub mod network;
pub mod report;
pub mod theme;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::report::{interface_report, traffic_report};
    pub use crate::theme::Palette;
}
