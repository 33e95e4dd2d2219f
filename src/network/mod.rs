//! Network interface inspection.
//!
//! [`interface`] snapshots the kernel's interface list and IPv4
//! configuration via `getifaddrs()`, [`mtu`] resolves the MTU (device ioctl
//! with a sysfs fallback), and [`traffic`] parses the cumulative counter
//! table at `/proc/net/dev`.

pub mod interface;
pub mod mtu;
pub mod traffic;

#[cfg(test)]
mod tests;
