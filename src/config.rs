//! Process configuration
//!
//! Every flag can also be set from the environment; `main` loads `.env`
//! before parsing.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Default listen host
pub const HOST_DEFAULT: &str = "127.0.0.1";

/// Default listen port
pub const PORT_DEFAULT: u16 = 4000;

/// Default database pool size
pub const DATABASE_CONNECTIONS_COUNT_DEFAULT: u32 = 10;

/// Application name
pub const APP_NAME: &str = "itemql";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Config
// =============================================================================

/// GraphQL CRUD service for items
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = APP_NAME)]
#[command(about = "GraphQL CRUD service for items")]
#[command(version)]
pub struct Config {
    /// Interface to listen on
    #[arg(long, env = "HOST", default_value = HOST_DEFAULT)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT_DEFAULT)]
    pub port: u16,

    /// PostgreSQL connection URL; items are kept in memory when unset
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DATABASE_CONNECTIONS_COUNT_DEFAULT)]
    pub max_connections: u32,

    /// Do not serve the GraphiQL IDE on GET /graphql
    #[arg(long, env = "DISABLE_GRAPHIQL")]
    pub disable_graphiql: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    /// Returns an error if `host` is not an IP address.
    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid host {:?}: {e}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Default log filter for the configured verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info,tower_http=debug",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether GET /graphql serves GraphiQL.
    #[must_use]
    pub fn graphiql(&self) -> bool {
        !self.disable_graphiql
    }
}

// =============================================================================
// Tests
// =============================================================================
