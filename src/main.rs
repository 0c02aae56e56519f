use std::path::Path;

use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::config::AppConfig;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::file_repo::FileTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    prepare_store_dir(&config.todo_file)?;
    let repo = FileTodoRepository::new(config.todo_file.clone());
    let service = TodoServiceImpl::new(repo);
    let todos_router = todos::router(todos::AppState { service });
    let router = routing::app(todos_router);

    let addr = config.bind_addr;
    tracing::info!(%addr, store = %config.todo_file.display(), "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}

// The file itself is created on first write.
fn prepare_store_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() && !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
