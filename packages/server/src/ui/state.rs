//! Server state shared by the handlers.

use std::sync::Arc;

use crate::domain::PeerRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn PeerRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn PeerRepository>) -> Self {
        Self { repository }
    }
}
