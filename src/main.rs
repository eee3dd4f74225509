/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use clap::Parser;
use jobboard_core::database::{close_db, connect_db};
use jobboard_core::init_state;
use jobboard_core::types::Cli;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level `{}`", level))
}

fn init_logging(cli: &Cli) -> Result<()> {
    let subscriber = tracing_subscriber::fmt().with_env_filter(log_filter(&cli.log_level)?);

    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let _guard = match (cli.report_errors, cli.sentry_dsn.as_deref()) {
        (true, Some(dsn)) => Some(sentry::init(dsn)),
        _ => None,
    };

    let shutdown_timeout = Duration::from_secs(cli.shutdown_timeout);
    let client = connect_db(&cli)
        .await
        .context("Failed to connect to database")?;

    let state = init_state(cli, &client).await?;

    let served = web::serve_web(state).await;
    if let Err(e) = &served {
        error!(error = %e, "Web server failed");
    }

    close_db(client, shutdown_timeout).await;
    served.context("Failed to serve http")?;

    info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::log_filter;

    #[test]
    fn test_log_filter_accepts_directives() {
        assert!(log_filter("info").is_ok());
        assert!(log_filter("jobboard_core=debug,tower_http=trace").is_ok());
    }

    #[test]
    fn test_log_filter_rejects_invalid_level() {
        let err = log_filter("verbose=loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level `verbose=loud`");
    }
}
