use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::LedgerService;
use crate::http;

/// Cashbook - in-memory customer ledger over HTTP
#[derive(Parser, Debug)]
#[command(name = "cashbook")]
#[command(about = "Serve an in-memory customer ledger over HTTP")]
#[command(version)]
pub struct Cli {
    /// Address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3333)]
    pub port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Reject negative deposit and withdrawal amounts
    #[arg(long)]
    pub strict_amounts: bool,
}

impl Cli {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address '{}:{}'", self.bind, self.port))
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "cashbook=debug,tower_http=debug"
        } else {
            "cashbook=info,tower_http=info"
        }
    }

    pub async fn run(self) -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(self.log_filter())),
            )
            .init();

        let addr = self.socket_addr()?;
        let service = LedgerService::in_memory().with_strict_amounts(self.strict_amounts);
        let app = http::app(Arc::new(service));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!(%addr, strict_amounts = self.strict_amounts, "listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
