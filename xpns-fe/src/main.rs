//! xpns-fe (Form Entry) - Expense entry service
//!
//! Serves the expense entry form on a local port, holds the in-progress
//! draft, and relays validated drafts to the configured Google Sheets
//! webhook.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use xpns_common::config::{self, TomlConfig};
use xpns_fe::{build_router, AppState, SheetsClient};

/// Command-line arguments for xpns-fe
#[derive(Parser, Debug)]
#[command(name = "xpns-fe")]
#[command(about = "Expense form entry service for XPNS")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Google Apps Script web app URL
    #[arg(long)]
    web_app_url: Option<String>,

    /// Target sheet inside the spreadsheet
    #[arg(long)]
    sheet_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting XPNS Form Entry (xpns-fe) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let toml_config = TomlConfig::load("xpns-fe");
    let endpoint = config::resolve_endpoint(
        args.web_app_url.as_deref(),
        args.sheet_name.as_deref(),
        &toml_config,
    );
    let port = config::resolve_port(args.port, &toml_config);

    if endpoint.is_configured() {
        info!(sheet = %endpoint.sheet_name, "Webhook endpoint configured");
    } else {
        warn!(
            "Web app URL is not configured; submissions will be refused until {} is set",
            config::WEB_APP_URL_ENV
        );
    }

    let client = SheetsClient::new(endpoint)
        .map_err(|e| anyhow::anyhow!("Failed to create webhook client: {}", e))?;
    let state = AppState::new(client);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("xpns-fe listening on http://127.0.0.1:{}", port);
    info!("Entry form: http://127.0.0.1:{}/", port);

    axum::serve(listener, app).await?;

    Ok(())
}
