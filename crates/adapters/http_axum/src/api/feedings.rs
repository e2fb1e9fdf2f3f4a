//! JSON REST handlers for feedings.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use tamagotchi_app::ports::{FeedingRepository, PlaytimeRepository};
use tamagotchi_domain::feeding::{Feeding, FeedingDraft};
use tamagotchi_domain::id::FeedingId;

use super::{check_update, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Feeding";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Feeding>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Feeding>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Feeding>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("/api/Feedings/{}", json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/Feedings`
pub async fn list<FR, PR>(
    State(state): State<AppState<FR, PR>>,
) -> Result<ListResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let feedings = state.feeding_service.list_feedings().await?;
    Ok(ListResponse::Ok(Json(feedings)))
}

/// `GET /api/Feedings/:id`
pub async fn get<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let id: FeedingId = parse_id(ENTITY, &id)?;
    let feeding = state.feeding_service.get_feeding(id).await?;
    Ok(GetResponse::Ok(Json(feeding)))
}

/// `POST /api/Feedings`
pub async fn create<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    payload: Result<Json<FeedingDraft>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let Json(draft) = payload?;
    let created = state.feeding_service.create_feeding(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/Feedings/:id`
pub async fn update<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
    payload: Result<Json<FeedingDraft>, JsonRejection>,
) -> Result<NoContentResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let id: FeedingId = parse_id(ENTITY, &id)?;
    let Json(draft) = payload?;
    let outcome = state.feeding_service.update_feeding(id, draft).await?;
    check_update(ENTITY, id.to_string(), outcome)?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /api/Feedings/:id`
pub async fn delete<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<NoContentResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let id: FeedingId = parse_id(ENTITY, &id)?;
    state.feeding_service.delete_feeding(id).await?;
    Ok(NoContentResponse::NoContent)
}
