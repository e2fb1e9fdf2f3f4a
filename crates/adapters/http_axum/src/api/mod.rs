//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod feedings;
#[allow(clippy::missing_errors_doc)]
pub mod playtimes;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use tamagotchi_app::ports::{FeedingRepository, PlaytimeRepository};
use tamagotchi_app::services::UpdateOutcome;
use tamagotchi_domain::error::{ConflictError, NotFoundError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Feeding collection paths, canonical spelling first.
pub const FEEDINGS_PATHS: [&str; 2] = ["/Feedings", "/feedings"];
/// Playtime collection paths, canonical spelling first.
pub const PLAYTIMES_PATHS: [&str; 2] = ["/Playtimes", "/playtimes"];

/// Build the `/api` sub-router.
pub fn routes<FR, PR>() -> Router<AppState<FR, PR>>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    let mut router = Router::new();

    for base in FEEDINGS_PATHS {
        router = router
            .route(
                base,
                get(feedings::list::<FR, PR>).post(feedings::create::<FR, PR>),
            )
            .route(
                &format!("{base}/{{id}}"),
                get(feedings::get::<FR, PR>)
                    .put(feedings::update::<FR, PR>)
                    .delete(feedings::delete::<FR, PR>),
            );
    }

    for base in PLAYTIMES_PATHS {
        router = router
            .route(
                base,
                get(playtimes::list::<FR, PR>).post(playtimes::create::<FR, PR>),
            )
            .route(
                &format!("{base}/{{id}}"),
                get(playtimes::get::<FR, PR>)
                    .put(playtimes::update::<FR, PR>)
                    .delete(playtimes::delete::<FR, PR>),
            );
    }

    router
}

/// Parse a path segment into a typed id, rejecting it with `400` otherwise.
fn parse_id<T: FromStr>(entity: &'static str, raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(ValidationError::InvalidId {
            entity,
            value: raw.to_string(),
        })
    })
}

/// Turn a non-successful [`UpdateOutcome`] into the matching error.
fn check_update(entity: &'static str, id: String, outcome: UpdateOutcome) -> Result<(), ApiError> {
    match outcome {
        UpdateOutcome::Updated => Ok(()),
        UpdateOutcome::NotFound => Err(NotFoundError { entity, id }.into()),
        UpdateOutcome::Conflict => Err(ConflictError { entity, id }.into()),
    }
}
