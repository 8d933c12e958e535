use serde::{Deserialize, Serialize};

use crate::{
    spotify::{ApiError, MAX_PAGE_SIZE, SpotifyApi},
    types::{PlayHistory, RecentlyPlayedResponse, SpotifyTrack, TopTracksResponse},
};

/// One of the three listening-history windows Spotify ranks top tracks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Roughly the last four weeks.
    Short,
    /// Roughly the last six months.
    Medium,
    /// Several years of history.
    Long,
}

impl TimeRange {
    pub fn as_query(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }
}

impl SpotifyApi {
    /// Retrieves the caller's top tracks for one time range, in rank order.
    ///
    /// Always requests the largest page the endpoint allows, so the position
    /// of a track in the returned vector plus one is its rank in that window.
    ///
    /// # Errors
    ///
    /// Any non-success status or network failure is returned as [`ApiError`];
    /// an expired token shows up as [`ApiError::Unauthorized`].
    pub async fn top_tracks(
        &self,
        token: &str,
        range: TimeRange,
    ) -> Result<Vec<SpotifyTrack>, ApiError> {
        let limit = MAX_PAGE_SIZE.to_string();
        let res: TopTracksResponse = self
            .get_json(
                token,
                "me/top/tracks",
                &[("time_range", range.as_query()), ("limit", limit.as_str())],
            )
            .await?;

        Ok(res.items)
    }

    /// Retrieves the caller's most recently played tracks, newest first.
    pub async fn recently_played(&self, token: &str) -> Result<Vec<PlayHistory>, ApiError> {
        let limit = MAX_PAGE_SIZE.to_string();
        let res: RecentlyPlayedResponse = self
            .get_json(token, "me/player/recently-played", &[("limit", limit.as_str())])
            .await?;

        Ok(res.items)
    }
}
