use crate::errors::{ServerError, ServerResult};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "activities_server=debug,activities_core=debug,tower_http=debug";

/// Runtime settings, taken from the command line or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "activities-server", version, about = "Extracurricular activity signup service")]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Print a colored log of every signup and unregister
    #[arg(long, env = "MONITORING")]
    pub monitoring: bool,

    /// tracing-subscriber filter directives
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Allow cross-origin requests from any origin
    #[arg(long, env = "CORS_PERMISSIVE")]
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            ServerError::config(format!("invalid bind address {:?}: {}", self.bind_address, e))
        })
    }
}
