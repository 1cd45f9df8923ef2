//! `/todos` and `/todos/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{list_collection, load, JsonBody, Listing};
use crate::error::ApiError;
use crate::links::{BaseUrl, Links};
use crate::store::{to_document, Database, Document};
use crate::text::{is_alphanumeric, title_case};

/// A todo as it sits in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TodoRecord {
    title: String,
    #[serde(default)]
    description: String,
}

/// `POST /todos` body.
#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// `PATCH /todos/{id}` body. Only the description can change.
#[derive(Debug, Deserialize)]
pub struct TodoPatch {
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TodoView {
    pub title: String,
    pub description: String,
    pub links: Links,
}

impl TodoView {
    /// The view returned on reads: the title is title-cased for display.
    fn rendered(record: TodoRecord, self_link: &str) -> Self {
        Self {
            title: title_case(&record.title),
            description: record.description,
            links: Links::to_self(self_link),
        }
    }
}

pub async fn list_todos(
    State(db): State<Database>,
    base: BaseUrl,
) -> Result<Json<Listing>, ApiError> {
    list_collection(db.todos.as_ref(), &base).await.map(Json)
}

/// `title` is required; an empty string counts as missing and is rejected
/// like an absent one. `description` defaults to empty.
pub async fn create_todo(
    State(db): State<Database>,
    base: BaseUrl,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<TodoView>), ApiError> {
    let title = input
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(|| ApiError::Validation("title is required".to_string()))?;
    let record = TodoRecord {
        title,
        description: input.description.unwrap_or_default(),
    };

    let id = db.todos.insert_one(to_document(&record)?).await?;
    tracing::debug!(%id, "todo created");

    // The creation response echoes the stored fields verbatim.
    let view = TodoView {
        title: record.title,
        description: record.description,
        links: Links::to_self(base.join(id)),
    };
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_todo(
    State(db): State<Database>,
    Path(raw_id): Path<String>,
    base: BaseUrl,
) -> Result<Json<TodoView>, ApiError> {
    let (_, record) = load::<TodoRecord>(db.todos.as_ref(), &raw_id).await?;
    Ok(Json(TodoView::rendered(record, base.as_str())))
}

pub async fn update_todo(
    State(db): State<Database>,
    Path(raw_id): Path<String>,
    base: BaseUrl,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<TodoView>, ApiError> {
    let (id, mut record) = load::<TodoRecord>(db.todos.as_ref(), &raw_id).await?;

    let description = patch.description.unwrap_or_default();
    if !is_alphanumeric(&description) {
        return Err(ApiError::Validation(
            "description must be alphanumeric".to_string(),
        ));
    }

    let mut set = Document::new();
    set.insert("description".to_string(), description.clone().into());
    if !db.todos.update_one(&id, set).await? {
        return Err(ApiError::NotFound);
    }
    tracing::debug!(%id, "todo updated");

    record.description = description;
    Ok(Json(TodoView::rendered(record, base.as_str())))
}

/// Responds 204 and still carries the deleted todo's final view as a body.
pub async fn delete_todo(
    State(db): State<Database>,
    Path(raw_id): Path<String>,
    base: BaseUrl,
) -> Result<(StatusCode, Json<TodoView>), ApiError> {
    let (id, record) = load::<TodoRecord>(db.todos.as_ref(), &raw_id).await?;
    if !db.todos.delete_one(&id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::debug!(%id, "todo deleted");

    Ok((
        StatusCode::NO_CONTENT,
        Json(TodoView::rendered(record, base.as_str())),
    ))
}
