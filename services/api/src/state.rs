//! Application state shared across handlers

use crate::repositories::{UserRepository, game::GameRepository};

/// Application state shared across handlers. Repositories are explicit
/// dependencies so handlers never reach for module-level connection state.
#[derive(Clone)]
pub struct AppState {
    pub game_repository: GameRepository,
    pub user_repository: UserRepository,
}
