use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::auth::AppState;
use crate::routes;
use configs::ServerConfig;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load server settings from config.toml when present and valid, otherwise
/// fall back to env vars (`SERVER_HOST`, `PORT`) and finally the defaults
/// (127.0.0.1:3000, assets from the working directory).
fn load_server_config() -> ServerConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server,
        Err(_) => {
            let mut server = ServerConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                server.host = host;
            }
            if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                server.port = port;
            }
            server
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let server_cfg = load_server_config();
    common::env::ensure_env(&server_cfg.static_dir).await?;

    // All state is process-local; it lives exactly as long as the server.
    let state = AppState::new();

    let cors = build_cors();
    let app: Router = routes::build_router(state, cors, &server_cfg.static_dir);

    let addr: SocketAddr = format!("{}:{}", server_cfg.host, server_cfg.port).parse()?;
    info!(%addr, "starting opticore mock server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("opticore-invalid-server-config.toml");
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 0\n").unwrap();
        std::env::set_var("CONFIG_PATH", path.to_str().unwrap());

        // port = 0 fails validation, so the file must be ignored entirely
        let cfg = load_server_config();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "127.0.0.1");

        std::env::remove_var("CONFIG_PATH");
        let _ = std::fs::remove_file(&path);
    }
}
