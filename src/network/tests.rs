use super::interface::{InterfaceTable, Ipv4Config};
use super::traffic::{parse_counters, InterfaceCounters};

const STATS_TABLE: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
  eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0
    lo: 2776770 11307 0 0 0 0 0 0 2776770 11307 0 0 0 0 0 0
";

#[test]
fn parses_rx_and_tx_byte_fields() {
    let counters = parse_counters(STATS_TABLE);

    assert_eq!(counters.len(), 2);
    assert_eq!(
        counters[0],
        InterfaceCounters { name: "eth0".to_string(), rx_bytes: 100, tx_bytes: 200 }
    );
    assert_eq!(counters[1].name, "lo");
    assert_eq!(counters[1].rx_bytes, 2_776_770);
    assert_eq!(counters[1].tx_bytes, 2_776_770);
}

#[test]
fn header_lines_are_never_parsed_as_interfaces() {
    // The second banner line contains a colon and would otherwise parse.
    let counters = parse_counters(STATS_TABLE);
    assert!(counters.iter().all(|c| c.name != "face" && !c.name.starts_with("Inter")));
}

#[test]
fn truncated_line_is_skipped_without_disturbing_neighbors() {
    let table = "\
header one
header two
  eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0
  bad0: 1 2 3 4 5
  eth1: 300 0 0 0 0 0 0 0 400 0 0 0 0 0 0 0
";
    let counters = parse_counters(table);

    assert_eq!(counters.len(), 2);
    assert_eq!(counters[0].name, "eth0");
    assert_eq!(counters[1].name, "eth1");
    assert_eq!(counters[1].rx_bytes, 300);
    assert_eq!(counters[1].tx_bytes, 400);
}

#[test]
fn line_without_colon_is_skipped() {
    let table = "\
header one
header two
no colon on this line at all
  eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0
";
    let counters = parse_counters(table);

    assert_eq!(counters.len(), 1);
    assert_eq!(counters[0].name, "eth0");
}

#[test]
fn non_numeric_counters_are_skipped() {
    let table = "\
header one
header two
  bad0: what 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0
  bad1: 100 0 0 0 0 0 0 0 nope 0 0 0 0 0 0 0
  eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0
";
    let counters = parse_counters(table);

    assert_eq!(counters.len(), 1);
    assert_eq!(counters[0].name, "eth0");
}

#[test]
fn blank_lines_are_skipped_silently() {
    let table = "\
header one
header two

  eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0

";
    let counters = parse_counters(table);
    assert_eq!(counters.len(), 1);
}

#[test]
fn empty_table_yields_no_counters() {
    assert!(parse_counters("").is_empty());
    assert!(parse_counters("header one\nheader two\n").is_empty());
}

#[test]
fn zero_counters_survive_parsing_unchanged() {
    let table = "\
header one
header two
  idle0: 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0
";
    let counters = parse_counters(table);
    assert_eq!(counters[0].rx_bytes, 0);
    assert_eq!(counters[0].tx_bytes, 0);
}

#[test]
fn ipv4_config_defaults_to_all_absent() {
    let config = Ipv4Config::default();
    assert!(config.address.is_none());
    assert!(config.netmask.is_none());
    assert!(config.broadcast.is_none());
}

#[test]
fn snapshot_succeeds_on_a_live_system() {
    let table = InterfaceTable::snapshot().expect("getifaddrs should succeed");
    assert!(table.names().iter().all(|name| !name.is_empty()));
}

#[test]
#[ignore = "needs a host with a loopback interface"]
fn snapshot_sees_the_loopback_interface() {
    let table = InterfaceTable::snapshot().expect("getifaddrs should succeed");
    assert!(table.names().iter().any(|name| name == "lo"));

    let lo = table.ipv4("lo").expect("loopback should have an IPv4 binding");
    assert_eq!(lo.address, Some(std::net::Ipv4Addr::LOCALHOST));
    // Loopback does not advertise IFF_BROADCAST.
    assert!(lo.broadcast.is_none());
}
