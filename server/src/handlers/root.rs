use axum::Json;
use serde::Serialize;

use crate::links::{BaseUrl, Links};

#[derive(Debug, Serialize)]
pub struct EntryPoint {
    pub links: Links,
}

/// `GET /`: directory of the resource collections.
pub async fn entry_point(base: BaseUrl) -> Json<EntryPoint> {
    Json(EntryPoint {
        links: Links {
            todos: Some(base.join("todos")),
            users: Some(base.join("users")),
            ..Links::default()
        },
    })
}
