//! Rendering of the two report sections.
//!
//! Both renderers write plain text (plus the palette's escapes) to any
//! [`io::Write`], so tests capture output in a buffer and the binary hands
//! in stdout. The pipelines are independent: neither calls into, or is
//! aborted by, the other.

use std::fs;
use std::io::{self, Write};
use std::net::Ipv4Addr;

use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::format::format_bytes_with;
use crate::network::interface::InterfaceTable;
use crate::network::{mtu, traffic};
use crate::theme::Palette;

/// Rendered for address fields the kernel does not report.
const NOT_AVAILABLE: &str = "N/A";
/// Rendered when both MTU methods fail.
const MTU_UNAVAILABLE: &str = "Unable to retrieve";
/// Rendered for a byte counter of exactly zero.
const NO_TRAFFIC: &str = "No traffic";

/// Runs the interface pipeline: enumerate, resolve attributes, print.
///
/// A failed enumeration is the only error; a missing IPv4 binding or an
/// unresolvable MTU renders as a sentinel and never fails the interface.
pub fn interface_report<W: Write>(out: &mut W, config: &Config, palette: Palette) -> Result<()> {
    let table = InterfaceTable::snapshot()?;
    render_interfaces(out, &table, config, palette)?;
    Ok(())
}

fn render_interfaces<W: Write>(
    out: &mut W,
    table: &InterfaceTable,
    config: &Config,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out, "{}Network Interfaces:{}", palette.sepia, palette.reset)?;
    for name in table.names() {
        if !config.wants(name) {
            continue;
        }
        writeln!(out, "{}{name}:{}", palette.sepia, palette.reset)?;

        let ipv4 = table.ipv4(name).cloned().unwrap_or_default();
        render_address(out, "inet", ipv4.address, palette)?;
        render_address(out, "netmask", ipv4.netmask, palette)?;
        render_address(out, "broadcast", ipv4.broadcast, palette)?;

        match mtu::resolve(name, &config.sysfs_net) {
            Some(mtu) => writeln!(out, "    MTU: {}{mtu}{}", palette.grey, palette.reset)?,
            None => writeln!(out, "    MTU: {}{MTU_UNAVAILABLE}{}", palette.grey, palette.reset)?,
        }
    }
    Ok(())
}

fn render_address<W: Write>(
    out: &mut W,
    label: &str,
    address: Option<Ipv4Addr>,
    palette: Palette,
) -> io::Result<()> {
    match address {
        Some(address) => writeln!(out, "    {label}: {}{address}{}", palette.grey, palette.reset),
        None => writeln!(out, "    {label}: {}{NOT_AVAILABLE}{}", palette.grey, palette.reset),
    }
}

/// Runs the traffic pipeline: read the statistics table, parse, print.
///
/// A missing table (non-Linux host, restricted mount) is recoverable: one
/// explanatory line is printed and the pipeline reports success. Any other
/// read failure is an error.
pub fn traffic_report<W: Write>(out: &mut W, config: &Config, palette: Palette) -> Result<()> {
    let table = match fs::read_to_string(&config.proc_net_dev) {
        Ok(table) => table,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(
                path = %config.proc_net_dev.display(),
                "statistics table missing, skipping traffic report"
            );
            writeln!(
                out,
                "Unable to read {}. Traffic statistics are only available on Linux.",
                config.proc_net_dev.display()
            )?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    render_traffic(out, &table, config, palette)?;
    Ok(())
}

fn render_traffic<W: Write>(
    out: &mut W,
    table: &str,
    config: &Config,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}Traffic Statistics:{}", palette.sepia, palette.reset)?;
    for counters in traffic::parse_counters(table) {
        if !config.wants(&counters.name) {
            continue;
        }
        writeln!(out, "{}  {}:{}", palette.sepia, counters.name, palette.reset)?;
        render_direction(out, "RX", counters.rx_bytes, config, palette)?;
        render_direction(out, "TX", counters.tx_bytes, config, palette)?;
    }
    Ok(())
}

fn render_direction<W: Write>(
    out: &mut W,
    label: &str,
    bytes: u64,
    config: &Config,
    palette: Palette,
) -> io::Result<()> {
    if bytes == 0 {
        writeln!(out, "    {label}: {}{NO_TRAFFIC}{}", palette.grey, palette.reset)
    } else {
        let size = format_bytes_with(bytes, &config.byte_units);
        writeln!(out, "    {label}: {}{size}{}", palette.grey, palette.reset)
    }
}
