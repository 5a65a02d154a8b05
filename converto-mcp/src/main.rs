//! Converto MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - query: Convert a textual query ("5 kilometer to mile")
//! - list_categories: List all categories
//! - get_category: List the units of a category
//! - session_open / session_update / session_swap / session_state:
//!   Drive an interactive converter with a short history

mod config;
mod logging;
mod protocol;
mod tools;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{debug, error, info, warn};
use converto_units::REGISTRY;
use crate::config::Config;
use crate::protocol::{Server, PROTOCOL_VERSION, SERVER_VERSION};

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let filter_warning = logging::init_logging(&config.log_filter);
    for warning in config.warnings.iter().chain(filter_warning.iter()) {
        warn!("{}", warning);
    }

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Converto MCP server started");
    info!(
        categories = REGISTRY.categories().len(),
        history_limit = config.history_limit,
        "registry loaded"
    );

    let mut server = Server::new(&REGISTRY, &config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("server ready, waiting for requests");

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let Some(response) = server.handle_line(line) else {
                    continue;
                };
                if let Err(e) = write_line(&mut stdout, &response).await {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Ok(None) => {
                info!("client disconnected (EOF)");
                break;
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("server shutting down");
}

async fn write_line(stdout: &mut Stdout, line: &str) -> std::io::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
