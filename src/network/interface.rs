use std::collections::HashMap;
use std::ffi::CStr;
use std::io;
use std::net::Ipv4Addr;
use std::ptr;

use crate::error::{Error, Result};

/// IPv4 configuration of one interface.
///
/// Each field is `None` when the kernel reports no such address; an
/// interface that is down or IPv6-only yields all three as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ipv4Config {
    /// Interface address.
    pub address: Option<Ipv4Addr>,

    /// Subnet mask.
    pub netmask: Option<Ipv4Addr>,

    /// Broadcast address. Only present on interfaces that advertise
    /// `IFF_BROADCAST`, so loopback and point-to-point links report `None`.
    pub broadcast: Option<Ipv4Addr>,
}

/// One snapshot of the kernel's interface list.
///
/// Built from a single `getifaddrs()` walk. Interface names keep the order
/// the kernel returned them in; the IPv4 map only has entries for
/// interfaces with at least one `AF_INET` address.
#[derive(Debug, Clone)]
pub struct InterfaceTable {
    pub(crate) order: Vec<String>,
    pub(crate) ipv4: HashMap<String, Ipv4Config>,
}

impl InterfaceTable {
    /// Queries the kernel for the current interface list.
    ///
    /// Zero interfaces is a valid (empty) snapshot. A failed
    /// `getifaddrs()` call is an error; entries with null or empty names
    /// are skipped.
    pub fn snapshot() -> Result<Self> {
        let mut order = Vec::new();
        let mut ipv4: HashMap<String, Ipv4Config> = HashMap::new();

        let mut ifap: *mut libc::ifaddrs = ptr::null_mut();
        unsafe {
            if libc::getifaddrs(&mut ifap) != 0 {
                return Err(Error::system(format!(
                    "getifaddrs failed: {}",
                    io::Error::last_os_error()
                )));
            }

            // The list must be freed on every path out of the walk.
            let _guard = scopeguard::guard(ifap, |ifap| {
                libc::freeifaddrs(ifap);
            });

            let mut current = ifap;
            while !current.is_null() {
                let ifa = &*current;
                current = ifa.ifa_next;

                if ifa.ifa_name.is_null() {
                    continue;
                }
                let name = match CStr::from_ptr(ifa.ifa_name).to_str() {
                    Ok(name) if !name.is_empty() => name.to_string(),
                    _ => continue,
                };

                if !order.iter().any(|seen| *seen == name) {
                    order.push(name.clone());
                }

                if ifa.ifa_addr.is_null() {
                    continue;
                }
                if (*ifa.ifa_addr).sa_family != libc::AF_INET as libc::sa_family_t {
                    continue;
                }

                // getifaddrs() yields one entry per address; the first
                // AF_INET entry for a name wins, matching the single
                // AddressInfo reported per interface.
                let entry = ipv4.entry(name).or_default();
                if entry.address.is_none() {
                    entry.address = ipv4_of(ifa.ifa_addr);
                    entry.netmask = ipv4_of(ifa.ifa_netmask);
                    if (ifa.ifa_flags & libc::IFF_BROADCAST as libc::c_uint) != 0 {
                        entry.broadcast = ipv4_of(ifa.ifa_ifu);
                    }
                }
            }
        }

        Ok(Self { order, ipv4 })
    }

    /// Interface names in kernel discovery order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// IPv4 configuration for `name`, or `None` when the interface has no
    /// IPv4 binding.
    pub fn ipv4(&self, name: &str) -> Option<&Ipv4Config> {
        self.ipv4.get(name)
    }
}

/// Reads the IPv4 address out of a sockaddr pointer, if it holds one.
unsafe fn ipv4_of(sa: *const libc::sockaddr) -> Option<Ipv4Addr> {
    if sa.is_null() {
        return None;
    }
    if (*sa).sa_family != libc::AF_INET as libc::sa_family_t {
        return None;
    }
    let sin = &*(sa as *const libc::sockaddr_in);
    Some(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr)))
}
