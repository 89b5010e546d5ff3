use axum::{
    extract::{Path, State},
    Json,
};
use service::{
    errors::ServiceError,
    student::{Student, StudentReplacement},
};
use tracing::info;

use crate::{errors::ApiError, state::AppState};

/// `GET /students/all`; an empty registry answers with the seeded sample.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.registry.list().await)
}

/// `GET /students/:id`; `null` when absent.
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Json<Option<Student>> {
    Json(state.registry.get(id).await)
}

/// `POST /students/create`: upsert at the body's id.
pub async fn create(State(state): State<AppState>, Json(student): Json<Student>) -> Json<Vec<Student>> {
    info!(id = student.id, "create student request");
    Json(state.registry.create(student).await)
}

/// `PUT /students/update/:id`: whole-record replace under the path id; a body id is optional and ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<StudentReplacement>,
) -> Result<&'static str, ApiError> {
    state.registry.update(id, body).await?;
    Ok("Student update successful!")
}

/// `DELETE /students/delete/:id`: returns the remaining students.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Vec<Student>>, ApiError> {
    match state.registry.delete(id).await {
        Ok(remaining) => Ok(Json(remaining)),
        Err(ServiceError::NotFound(id)) => Err(ApiError::NotFound(format!("Student {id} doesn't exist."))),
        Err(e) => Err(e.into()),
    }
}
