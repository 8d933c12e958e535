use serde_json::Value;

use crate::spotify::{ApiError, SpotifyApi};

impl SpotifyApi {
    /// Returns the current user's profile exactly as Spotify sends it.
    ///
    /// The front-end only reads `display_name`, but the document is passed
    /// through untouched.
    pub async fn current_user(&self, token: &str) -> Result<Value, ApiError> {
        self.get_json(token, "me", &[]).await
    }
}
