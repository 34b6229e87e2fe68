use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::registry::CapacityPolicy;

/// Runtime configuration, read from flags with environment fallbacks
#[derive(Parser, Debug, Clone)]
#[command(name = "activities")]
#[command(about = "Mergington High School activity signups", long_about = None)]
#[command(version)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Reject signups once an activity reaches max_participants
    #[arg(long, env = "ENFORCE_CAPACITY", default_value_t = false)]
    pub enforce_capacity: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json_logs: bool,
}

impl Config {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::from_flag(self.enforce_capacity)
    }
}
