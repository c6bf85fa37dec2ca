//! Command-line interface definitions for newsbs.
//!
//! Every option is optional here: values left unset fall back to the YAML
//! config file (if one is given) and then to the built-in defaults. See
//! [`crate::config::Settings::load`].

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the newsbs server.
///
/// # Examples
///
/// ```sh
/// # Serve on the defaults (127.0.0.1:8000)
/// newsbs
///
/// # Listen on all interfaces with a config file
/// newsbs --host 0.0.0.0 --config ./newsbs.yaml
///
/// # Show fewer headlines per source and give up on slow sites sooner
/// newsbs --headline-limit 5 --timeout-secs 4
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "NEWSBS_HOST")]
    pub host: Option<String>,

    /// Port to bind the HTTP server to
    #[arg(short, long, env = "NEWSBS_PORT")]
    pub port: Option<u16>,

    /// Timeout in seconds for each request to a news site
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Maximum number of headline cards inspected per source
    #[arg(long)]
    pub headline_limit: Option<usize>,
}
