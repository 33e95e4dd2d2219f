use tracing::debug;

/// Path of the kernel's per-interface statistics table.
pub const PROC_NET_DEV: &str = "/proc/net/dev";

/// Whitespace-separated field positions after the colon. The table has a
/// fixed 16-field layout per interface; only these two are consumed.
const RX_BYTES_FIELD: usize = 0;
const TX_BYTES_FIELD: usize = 8;

/// The table starts with a two-line banner before any interface rows.
const HEADER_LINES: usize = 2;

/// Cumulative byte counters for one interface, as read from the kernel.
///
/// Counters increase monotonically since boot or interface reset; this
/// crate only ever reads them. Exactly zero means no traffic was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Parses the statistics table into per-interface counters.
///
/// Data lines have the shape `<name>: <fields...>`. A line without a
/// colon, with too few fields, or with non-numeric byte counters is
/// skipped with a diagnostic and never affects the remaining lines. Blank
/// lines are skipped silently. Row order is preserved.
pub fn parse_counters(table: &str) -> Vec<InterfaceCounters> {
    let mut counters = Vec::new();

    for line in table.lines().skip(HEADER_LINES) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((name, fields)) = line.split_once(':') else {
            debug!(line, "skipping statistics line without a colon");
            continue;
        };
        let name = name.trim();
        let fields: Vec<&str> = fields.split_whitespace().collect();

        if fields.len() <= TX_BYTES_FIELD {
            debug!(interface = name, fields = fields.len(), "skipping truncated statistics line");
            continue;
        }

        let rx = fields[RX_BYTES_FIELD].parse::<u64>();
        let tx = fields[TX_BYTES_FIELD].parse::<u64>();
        let (Ok(rx_bytes), Ok(tx_bytes)) = (rx, tx) else {
            debug!(interface = name, "skipping statistics line with non-numeric counters");
            continue;
        };

        counters.push(InterfaceCounters { name: name.to_string(), rx_bytes, tx_bytes });
    }

    counters
}
