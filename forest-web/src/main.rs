//! Application entry point for the fractal-forest web service.
//!
//! This binary wires up logging, binds the listen address, and
//! delegates all route handling to the [`server`] module.

mod page;
mod server;
mod svg;

use anyhow::anyhow;
use log::info;
use tiny_http::Server;

/// Address served when `FOREST_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let addr = std::env::var("FOREST_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let http = Server::http(&addr).map_err(|e| anyhow!("failed to bind {addr}: {e}"))?;

    info!("server starting at http://{addr}");
    println!("Server starting at http://{addr}");

    server::run(&http);
    Ok(())
}
