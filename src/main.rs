mod cofg;
mod error;
mod fetch;
mod port;
mod server;
#[cfg(test)]
mod test;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{debug, error, info};

use crate::cofg::config::Cofg;
use crate::error::AppResult;

fn init_logger() {
    env_logger::builder()
        .default_format()
        .format_module_path(true)
        .format_line_number(true)
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Run the whole smoke sequence: allocate an ephemeral port, serve the
/// content root on it, wait for the listener, fetch the homepage once and
/// check it carries the marker.
///
/// The server guard is stopped on every exit path (explicitly on the normal
/// path, via `Drop` otherwise), so a failed fetch never leaks the listener.
pub(crate) fn run_smoke(c: &Cofg) -> AppResult<()> {
    let port = port::find_free_port()?;
    debug!("allocated port {port}");

    let server =
        server::StaticServer::spawn(PathBuf::from(&c.public_path), port, c.directory_listing)?;

    let result = (|| {
        server::wait_ready(port, Duration::from_millis(c.fetch.ready_timeout_millis))?;
        let body = fetch::fetch_homepage(port, Duration::from_secs(c.fetch.timeout_secs))?;
        fetch::check_marker(&body, &c.marker)
    })();

    server.stop();
    result
}

fn main() {
    init_logger();
    let args = cofg::cli::Args::parse();

    let outcome = cofg::load(&args).and_then(|c| {
        debug!("cofg: {c:#?}");
        run_smoke(&c)
    });

    match outcome {
        Ok(()) => info!("homepage smoke test passed"),
        Err(e) => {
            error!("homepage smoke test failed: {e}");
            std::process::exit(1);
        }
    }
}
