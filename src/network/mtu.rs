use std::fs;
use std::io;
use std::mem;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Root of the kernel's per-interface sysfs tree.
pub const SYSFS_NET_ROOT: &str = "/sys/class/net";

/// Resolves the MTU for `interface`, or `None` when it cannot be retrieved.
///
/// Two methods in order: the `SIOCGIFMTU` ioctl on a transient datagram
/// socket, then the `mtu` node under `sysfs_root`. Failures of either
/// method never surface to the caller; both failing yields `None`.
pub fn resolve(interface: &str, sysfs_root: &Path) -> Option<u32> {
    match query_ioctl(interface) {
        Ok(mtu) => Some(mtu),
        Err(err) => {
            debug!(interface, error = %err, "MTU ioctl failed, trying sysfs");
            match query_sysfs(sysfs_root, interface) {
                Ok(mtu) => Some(mtu),
                Err(err) => {
                    warn!(interface, error = %err, "MTU unavailable");
                    None
                }
            }
        }
    }
}

/// Asks the device for its MTU via `SIOCGIFMTU`.
fn query_ioctl(interface: &str) -> Result<u32> {
    // The request struct holds a fixed, NUL-terminated name buffer.
    if interface.len() >= libc::IFNAMSIZ {
        return Err(Error::invalid_data(format!("interface name too long: {interface}")));
    }

    let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
    if fd < 0 {
        return Err(Error::system(format!("socket failed: {}", io::Error::last_os_error())));
    }
    // One descriptor per lookup; close it on every path out.
    let _guard = scopeguard::guard(fd, |fd| {
        unsafe { libc::close(fd) };
    });

    let mut request: libc::ifreq = unsafe { mem::zeroed() };
    for (dst, src) in request.ifr_name.iter_mut().zip(interface.as_bytes()) {
        *dst = *src as libc::c_char;
    }

    let rc = unsafe { libc::ioctl(fd, libc::SIOCGIFMTU, &mut request) };
    if rc != 0 {
        return Err(Error::system(format!(
            "SIOCGIFMTU failed for {interface}: {}",
            io::Error::last_os_error()
        )));
    }

    let mtu = unsafe { request.ifr_ifru.ifru_mtu };
    u32::try_from(mtu)
        .map_err(|_| Error::invalid_data(format!("negative MTU {mtu} for {interface}")))
}

/// Reads the MTU published at `<root>/<interface>/mtu`.
fn query_sysfs(root: &Path, interface: &str) -> Result<u32> {
    let path = root.join(interface).join("mtu");
    let text = fs::read_to_string(&path)?;
    text.trim()
        .parse()
        .map_err(|err| Error::invalid_data(format!("{}: {err}", path.display())))
}
