//! netsnap - one-shot network interface and traffic report.
//!
//! No arguments. Prints the interface section and the traffic section to
//! stdout and exits: 0 on completion (including a missing statistics
//! table), 1 on an unsupported platform or a failed pipeline, 130 when
//! interrupted.

use std::io::Write;
use std::process;

use tracing_subscriber::EnvFilter;

use netsnap::config::Config;
use netsnap::report;
use netsnap::theme::Palette;

const EXIT_FAILURE: i32 = 1;
const EXIT_INTERRUPTED: i32 = 130;

extern "C" fn on_interrupt(_signal: libc::c_int) {
    process::exit(EXIT_INTERRUPTED);
}

fn main() {
    if !cfg!(target_os = "linux") {
        eprintln!("netsnap reads Linux kernel interfaces (/proc, /sys) and only supports Linux hosts.");
        process::exit(EXIT_FAILURE);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let handler = on_interrupt as extern "C" fn(libc::c_int);
    unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };

    let config = Config::default();
    let palette = Palette::new(config.color);
    let mut stdout = std::io::stdout().lock();

    // The pipelines are independent: a failure in one is reported and the
    // other still runs.
    let mut failed = false;
    if let Err(err) = report::interface_report(&mut stdout, &config, palette) {
        eprintln!("{}Error: {err}{}", palette.red, palette.reset);
        failed = true;
    }
    if let Err(err) = report::traffic_report(&mut stdout, &config, palette) {
        eprintln!("{}Error: {err}{}", palette.red, palette.reset);
        failed = true;
    }
    let _ = stdout.flush();

    if failed {
        process::exit(EXIT_FAILURE);
    }
}
