//! JSON REST handlers for playtimes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use tamagotchi_app::ports::{FeedingRepository, PlaytimeRepository};
use tamagotchi_domain::id::PlaytimeId;
use tamagotchi_domain::playtime::{Playtime, PlaytimeDraft};

use super::{check_update, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Playtime";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Playtime>>),
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
    Ok(Json<Playtime>),
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
    Created(Json<Playtime>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("/api/Playtimes/{}", json.0.id);
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

/// `GET /api/Playtimes`
pub async fn list<FR, PR>(
    State(state): State<AppState<FR, PR>>,
) -> Result<ListResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let playtimes = state.playtime_service.list_playtimes().await?;
    Ok(ListResponse::Ok(Json(playtimes)))
}

/// `GET /api/Playtimes/:id`
pub async fn get<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let id: PlaytimeId = parse_id(ENTITY, &id)?;
    let playtime = state.playtime_service.get_playtime(id).await?;
    Ok(GetResponse::Ok(Json(playtime)))
}

/// `POST /api/Playtimes`
pub async fn create<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    payload: Result<Json<PlaytimeDraft>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let Json(draft) = payload?;
    let created = state.playtime_service.create_playtime(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/Playtimes/:id`
pub async fn update<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
    payload: Result<Json<PlaytimeDraft>, JsonRejection>,
) -> Result<NoContentResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let id: PlaytimeId = parse_id(ENTITY, &id)?;
    let Json(draft) = payload?;
    let outcome = state.playtime_service.update_playtime(id, draft).await?;
    check_update(ENTITY, id.to_string(), outcome)?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /api/Playtimes/:id`
pub async fn delete<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<NoContentResponse, ApiError>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let id: PlaytimeId = parse_id(ENTITY, &id)?;
    state.playtime_service.delete_playtime(id).await?;
    Ok(NoContentResponse::NoContent)
}
