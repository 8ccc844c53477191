use blog::{run_app, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> blog::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blog=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    if let Err(error) = run_app(config).await {
        tracing::error!("server stopped: {:#}", error);
        return Err(error);
    }
    Ok(())
}
