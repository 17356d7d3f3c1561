mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    tracing::info!(
        backend = config.settings.backend.base_url(),
        number_parsing = %config.settings.policy.numbers,
        delta_gap = %config.settings.policy.delta_gap,
        "form settings"
    );

    let app = routes::app(&config).expect("router init failed");
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "taudelta listening");
    axum::serve(listener, app).await.expect("server failed");
}
