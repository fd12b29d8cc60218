mod config;
mod event;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(config.key.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(
        host = %config.host,
        port = config.port,
        version = env!("CARGO_PKG_VERSION"),
        "parlor listening"
    );

    // Shutdown fires on the daily restart tick or an external signal; the
    // supervisor restarts the process with a fresh, empty room.
    axum::serve(listener, app)
        .with_graceful_shutdown(services::maintenance::shutdown_signal())
        .await
        .expect("server failed");
}
