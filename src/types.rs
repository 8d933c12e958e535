use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rank assigned to a track that does not appear in a listening window.
pub const SENTINEL_RANK: u32 = 75;

/// Genre used whenever the upstream reports no genre for an artist.
pub const UNKNOWN_GENRE: &str = "unknown";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: AlbumRef,
}

impl SpotifyTrack {
    pub fn primary_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }

    /// Medium sized cover (second image) when available, else the largest.
    pub fn medium_album_image(&self) -> String {
        self.album
            .images
            .get(1)
            .or_else(|| self.album.images.first())
            .map(|i| i.url.clone())
            .unwrap_or_default()
    }

    pub fn largest_album_image(&self) -> String {
        self.album
            .images
            .first()
            .map(|i| i.url.clone())
            .unwrap_or_default()
    }

    pub fn spotify_url(&self) -> String {
        self.external_urls.spotify.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<SpotifyTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Response of `GET /artists?ids=...`. Unknown ids come back as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Option<Artist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistory {
    pub track: SpotifyTrack,
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
}

/// A track merged across the three listening windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub artist_id: String,
    pub external_url: String,
    pub popularity: u32,
    pub album_image: String,
    pub short_rank: u32,
    pub medium_rank: u32,
    pub long_rank: u32,
    pub genre: String,
    pub listen_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub tracks: Vec<Track>,
    pub obscurity_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTrack {
    pub id: String,
    pub name: String,
    pub artist_name: String,
    pub album_image: String,
    pub played_at: DateTime<Utc>,
    pub external_url: String,
    pub genre: String,
}
