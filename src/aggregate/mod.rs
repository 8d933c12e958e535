//! # Aggregation
//!
//! Turns the raw Spotify top-track windows into the scored, genre-tagged
//! track list the presenter consumes.
//!
//! One aggregation is two rounds of concurrent requests:
//!
//! ```text
//! short ─┐
//! medium ├─► merge by track id ─► artist ids ─► genre batches (50 ids each) ─► score, sort
//! long ──┘
//! ```
//!
//! Each round is joined before the next starts. All state is owned by the
//! call; nothing is cached between requests. Any failing request fails the
//! whole aggregation, there is no partial result.

mod merge;
mod score;

pub use merge::TrackMerger;
pub use score::{
    DEFAULT_LONG_WEIGHT, DEFAULT_MEDIUM_WEIGHT, DEFAULT_SHORT_WEIGHT, Ranks, ScoreWeights,
    listen_score,
};

use crate::{
    spotify::{ApiError, SpotifyApi, TimeRange},
    types::{AggregationResult, PlayHistory, RecentTrack, Track, UNKNOWN_GENRE},
};

/// Fetches, merges and scores the caller's top tracks.
///
/// # Errors
///
/// Returns the first [`ApiError`] hit by any of the window or genre
/// requests. Nothing fetched before the failure is returned.
pub async fn aggregate(
    api: &SpotifyApi,
    token: &str,
    weights: &ScoreWeights,
) -> Result<AggregationResult, ApiError> {
    let (short, medium, long) = tokio::try_join!(
        api.top_tracks(token, TimeRange::Short),
        api.top_tracks(token, TimeRange::Medium),
        api.top_tracks(token, TimeRange::Long),
    )?;

    let mut merger = TrackMerger::new();
    merger.add_window(TimeRange::Short, &short);
    merger.add_window(TimeRange::Medium, &medium);
    merger.add_window(TimeRange::Long, &long);

    let genres = api.primary_genres(token, &merger.artist_ids()).await?;
    let tracks = merger.finish(&genres, weights);
    let obscurity_rating = obscurity_rating(&tracks);

    Ok(AggregationResult {
        tracks,
        obscurity_rating,
    })
}

/// `100 - mean(popularity)`, rounded and clamped to `0..=100`.
///
/// Computed over the merged set so a track that appears in several windows
/// counts once. An empty set rates 0.
pub fn obscurity_rating(tracks: &[Track]) -> u32 {
    if tracks.is_empty() {
        return 0;
    }

    let total: f64 = tracks.iter().map(|t| f64::from(t.popularity)).sum();
    let mean = total / tracks.len() as f64;
    (100.0 - mean).round().clamp(0.0, 100.0) as u32
}

/// The caller's recently played tracks, reshaped to the display fields.
///
/// The endpoint carries no artist genres, so `genre` is always
/// [`UNKNOWN_GENRE`].
pub async fn recent(api: &SpotifyApi, token: &str) -> Result<Vec<RecentTrack>, ApiError> {
    let items = api.recently_played(token).await?;
    Ok(items.into_iter().map(to_recent_track).collect())
}

fn to_recent_track(item: PlayHistory) -> RecentTrack {
    let track = item.track;
    RecentTrack {
        artist_name: track
            .primary_artist()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        album_image: track.largest_album_image(),
        external_url: track.spotify_url(),
        id: track.id.unwrap_or_default(),
        name: track.name,
        played_at: item.played_at,
        genre: UNKNOWN_GENRE.to_string(),
    }
}
