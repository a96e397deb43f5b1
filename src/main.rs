use fitlife::api::routes::create_routes;
use fitlife::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let app_config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;

    let app = create_routes(pool);

    let listener = TcpListener::bind(app_config.server_address()).await?;
    info!("FitLife server starting on http://{}", app_config.server_address());
    info!("Health check available at http://{}/health", app_config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
