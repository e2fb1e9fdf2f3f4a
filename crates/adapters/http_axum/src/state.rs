//! Shared application state for axum handlers.

use std::sync::Arc;

use tamagotchi_app::ports::{FeedingRepository, PlaytimeRepository};
use tamagotchi_app::services::feeding_service::FeedingService;
use tamagotchi_app::services::playtime_service::PlaytimeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<FR, PR> {
    /// Feeding CRUD service.
    pub feeding_service: Arc<FeedingService<FR>>,
    /// Playtime CRUD service.
    pub playtime_service: Arc<PlaytimeService<PR>>,
}

impl<FR, PR> Clone for AppState<FR, PR> {
    fn clone(&self) -> Self {
        Self {
            feeding_service: Arc::clone(&self.feeding_service),
            playtime_service: Arc::clone(&self.playtime_service),
        }
    }
}

impl<FR, PR> AppState<FR, PR>
where
    FR: FeedingRepository + Send + Sync + 'static,
    PR: PlaytimeRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(feeding_service: FeedingService<FR>, playtime_service: PlaytimeService<PR>) -> Self {
        Self {
            feeding_service: Arc::new(feeding_service),
            playtime_service: Arc::new(playtime_service),
        }
    }
}
