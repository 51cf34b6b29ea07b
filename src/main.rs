mod config;
mod routes;
mod state;
mod store;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let content = store::ContentStore::load(&config.content_file).expect("content fixture unreadable");
    tracing::info!(
        file = %config.content_file.display(),
        sections = content.sections().len(),
        "content fixture loaded"
    );

    let app = routes::app(state::AppState::new(content), &config.site_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site = %config.site_dir.display(), "portfolio dev host listening");
    axum::serve(listener, app).await.expect("server failed");
}
