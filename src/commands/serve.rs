//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, InMemoryUserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let app_state = if args.in_memory {
        tracing::warn!("Using in-memory user store, data is lost on shutdown");
        AppState::in_memory(Arc::new(InMemoryUserStore::new()))
    } else {
        let db = Database::connect(&config.database_url).await?;
        AppState::from_database(Arc::new(db))
    };

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = with_overrides(config, &args).server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Apply `--host`/`--port` on top of the environment configuration.
fn with_overrides(mut config: Config, args: &ServeArgs) -> Config {
    if let Some(host) = &args.host {
        config.server_host = host.clone();
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server_host: "10.0.0.1".to_string(),
            server_port: 3000,
            ..Config::default()
        }
    }

    #[test]
    fn test_address_from_config_without_flags() {
        let args = ServeArgs {
            host: None,
            port: None,
            in_memory: false,
        };

        assert_eq!(with_overrides(config(), &args).server_addr(), "10.0.0.1:3000");
    }

    #[test]
    fn test_flags_override_config_address() {
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            in_memory: true,
        };

        assert_eq!(with_overrides(config(), &args).server_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_port_flag_keeps_configured_host() {
        let args = ServeArgs {
            host: None,
            port: Some(9000),
            in_memory: false,
        };

        assert_eq!(with_overrides(config(), &args).server_addr(), "10.0.0.1:9000");
    }
}
