mod config;
mod routes;
mod state;
mod store;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    match &config.store {
        config::StoreConfig::Backend(backend) => {
            tracing::info!(url = %backend.base_url, table = %backend.table, "using hosted fact table");
        }
        config::StoreConfig::Memory => tracing::warn!("using in-memory fact store; rows are lost on restart"),
    }

    let state = state::AppState::from_config(&config).expect("fact store init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "fact board listening");
    axum::serve(listener, app).await.expect("server failed");
}
