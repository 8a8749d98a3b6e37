//! Server configuration, built from CLI flags (`datasynth-server/src/main.rs`'s
//! `Args` pattern, adapted to this service's knobs).

use std::path::PathBuf;

use clap::Parser;

/// 1 GiB upload size ceiling.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 1024 * 1024 * 1024;

/// 30 minute request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30 * 60;

#[derive(Parser, Debug, Clone)]
#[command(name = "settle-server")]
#[command(about = "Settlement file ingestion and reporting service", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[arg(short = 'H', long, env = "SETTLE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "SETTLE_PORT", default_value = "8080")]
    pub port: u16,

    /// Directory uploaded files are staged in before parsing.
    #[arg(long, env = "SETTLE_UPLOAD_DIR", default_value = "./uploads")]
    pub upload_dir: PathBuf,

    /// Maximum accepted upload size, in bytes.
    #[arg(long, env = "SETTLE_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: u64,

    /// Request timeout, in seconds, bounding synchronous handlers.
    #[arg(long, env = "SETTLE_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, env = "SETTLE_VERBOSE")]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upload_dir: PathBuf::from("./uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            verbose: false,
        }
    }
}
