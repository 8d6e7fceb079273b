//! Web backend for tango.

use eyre::WrapErr;
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_url = env::var("SERVER_URL")
        .wrap_err("Missing SERVER_URL")?
        .parse::<SocketAddr>()
        .wrap_err("Invalid SERVER_URL")?;

    let gemini_api_key = env::var("GEMINI_API_KEY").wrap_err("Missing GEMINI_API_KEY")?;
    let gemini_model = env::var("GEMINI_MODEL")
        .unwrap_or_else(|_| tango_server::domain::generator::DEFAULT_MODEL.to_string());

    let router = tango_server::router_from_vars(gemini_api_key, gemini_model)
        .await
        .wrap_err("Failed to build router")?;

    tracing::info!("Starting server at {server_url}");
    let server_addr = TcpListener::bind(server_url)
        .await
        .wrap_err("Failed to bind to address")?;
    axum::serve(server_addr, router.into_make_service())
        .await
        .wrap_err("Failed to start server")?;
    Ok(())
}
