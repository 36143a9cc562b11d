//! CRUD endpoints, one set per record kind
//!
//! Each handler makes exactly one store call. Point operations that match no
//! row return 404 straight away; nothing else is written to the response.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::RecordStore;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::Resource;

type Shared<G> = State<Arc<AppState<G>>>;

/// GET /api/{collection}
async fn list_records<G, R>(State(state): Shared<G>) -> Result<Json<Vec<R>>, ApiError>
where
    G: RecordStore<R>,
    R: Resource,
{
    let records = state.gateway().list_all().await?;
    tracing::debug!(resource = R::COLLECTION, count = records.len(), "listed records");
    Ok(Json(records))
}

/// GET /api/{collection}/{id}
async fn get_record<G, R>(
    State(state): Shared<G>,
    RecordId(id): RecordId,
) -> Result<Json<R>, ApiError>
where
    G: RecordStore<R>,
    R: Resource,
{
    let record = state
        .gateway()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME))?;

    Ok(Json(record))
}

/// POST /api/{collection}
async fn create_record<G, R>(
    State(state): Shared<G>,
    JsonBody(payload): JsonBody<R::Payload>,
) -> Result<(StatusCode, Json<R>), ApiError>
where
    G: RecordStore<R>,
    R: Resource,
{
    let fields = <R::Fields as TryFrom<R::Payload>>::try_from(payload)?;
    let record = state.gateway().insert(fields).await?;
    tracing::info!(resource = R::COLLECTION, id = record.id(), "record created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/{collection}/{id} - replaces every mutable field
async fn update_record<G, R>(
    State(state): Shared<G>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<R::Payload>,
) -> Result<Json<R>, ApiError>
where
    G: RecordStore<R>,
    R: Resource,
{
    let fields = <R::Fields as TryFrom<R::Payload>>::try_from(payload)?;
    let record = state
        .gateway()
        .replace(id, fields)
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME))?;
    tracing::info!(resource = R::COLLECTION, id, "record updated");

    Ok(Json(record))
}

/// DELETE /api/{collection}/{id} - responds with the removed record
async fn delete_record<G, R>(
    State(state): Shared<G>,
    RecordId(id): RecordId,
) -> Result<Json<R>, ApiError>
where
    G: RecordStore<R>,
    R: Resource,
{
    let record = state
        .gateway()
        .remove(id)
        .await?
        .ok_or_else(|| ApiError::not_found(R::NAME))?;
    tracing::info!(resource = R::COLLECTION, id, "record deleted");

    Ok(Json(record))
}

/// Routes for one record kind, mounted at `/api/{R::COLLECTION}`
pub fn router<G, R>() -> Router<Arc<AppState<G>>>
where
    G: RecordStore<R>,
    R: Resource,
{
    let collection = format!("/api/{}", R::COLLECTION);
    let member = format!("{}/{{id}}", collection);

    Router::new()
        .route(&collection, get(list_records::<G, R>).post(create_record::<G, R>))
        .route(
            &member,
            get(get_record::<G, R>)
                .put(update_record::<G, R>)
                .delete(delete_record::<G, R>),
        )
}
