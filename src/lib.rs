mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;
mod templates;

use std::{net::SocketAddr, str::FromStr, sync::Arc};

use anyhow::Context;
pub use anyhow::Result;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::*;
pub use data_formats::*;
use errors::panic_response;
use handlers::*;
pub use models::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
pub use templates::{format_timestamp, load_templates, split_lines};
use tera::Tera;
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

pub type JsonResponse<T> = (StatusCode, Json<T>);

/// Shared by every handler: one pool per process and the templates parsed at startup.
pub struct AppState {
    pub db: SqlitePool,
    pub templates: Tera,
}

impl AppState {
    pub fn new(db: SqlitePool, templates: Tera) -> Self {
        AppState { db, templates }
    }
}

pub async fn run_app(config: Config) -> Result<()> {
    let db = init_db(&config.database_url, MAX_DB_CONNECTIONS).await?;
    let templates = load_templates(&config.template_dir)?;
    let state = Arc::new(AppState::new(db, templates));
    let app = make_router(&config.public_dir).layer(Extension(state));

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("starting server on {}", address);
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .create_if_missing(true)
        .foreign_keys(true);
    // An in-memory database lives only as long as its connections.
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to connect to the database")?;
    tracing::debug!("running migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    Ok(pool)
}

/// Routes without state; callers attach an `Extension<Arc<AppState>>` layer.
/// Paths no route claims are looked up in `public_dir`; misses and non-GET requests
/// there answer with the failure envelope.
pub fn make_router(public_dir: &str) -> Router {
    let static_files = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(unmatched_path.into_service());
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/article/:articleid", get(get_article).fallback(method_not_allowed))
        .route(
            "/post",
            get(get_post_form)
                .post(post_article)
                .fallback(method_not_allowed),
        )
        .route("/comment/:articleid", post(post_comment).fallback(method_not_allowed))
        .fallback_service(static_files)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
