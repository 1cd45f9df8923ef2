//! Hypermedia REST service for todos and users.
//!
//! # Overview
//! Every response embeds `links` back into the API, starting from the entry
//! point at `/`. Handlers are stateless; all state lives behind the
//! [`store::DocumentCollection`] trait, injected through [`store::Database`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod links;
pub mod password;
pub mod store;
pub mod telemetry;
pub mod text;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use handlers::{root, todos, users};

pub use config::Config;
pub use error::ApiError;
pub use store::{Database, DocumentCollection, DocumentId, MemoryCollection, StoreError};

pub fn app(database: Database) -> Router {
    Router::new()
        .route("/", get(root::entry_point))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            get(todos::get_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .with_state(database)
}

/// [`app`] with per-request tracing spans.
pub fn app_with_tracing(database: Database) -> Router {
    app(database).layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, database: Database) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_tracing(database))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(err) => {
            tracing::warn!(error = %err, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
