//! Run configuration, chosen once at startup and passed by reference.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::format::BYTE_UNITS;
use crate::network::{mtu::SYSFS_NET_ROOT, traffic::PROC_NET_DEV};

/// Configuration for a single report run.
///
/// There is no config file and no command line: callers construct a value
/// (usually [`Config::default`]), adjust fields, and pass it to the report
/// functions. Nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Restrict both pipelines to these interface names. `None` or an
    /// empty set disables filtering.
    pub filter: Option<HashSet<String>>,

    /// Emit ANSI color escapes. When false, output is the same text with
    /// every escape collapsed to the empty string.
    pub color: bool,

    /// Ordered unit ladder for the byte formatter.
    pub byte_units: Vec<String>,

    /// Path of the kernel's per-interface statistics table.
    pub proc_net_dev: PathBuf,

    /// Root of the per-interface sysfs tree, used for the MTU fallback.
    pub sysfs_net: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: None,
            color: true,
            byte_units: BYTE_UNITS.iter().map(|unit| unit.to_string()).collect(),
            proc_net_dev: PathBuf::from(PROC_NET_DEV),
            sysfs_net: PathBuf::from(SYSFS_NET_ROOT),
        }
    }
}

impl Config {
    /// Whether the filter admits `interface`.
    pub fn wants(&self, interface: &str) -> bool {
        match &self.filter {
            Some(filter) if !filter.is_empty() => filter.contains(interface),
            _ => true,
        }
    }
}
