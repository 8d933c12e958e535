use std::collections::HashMap;

use futures::future::try_join_all;

use crate::{
    spotify::{ApiError, MAX_ARTIST_IDS, SpotifyApi},
    types::{Artist, SeveralArtistsResponse, UNKNOWN_GENRE},
};

impl SpotifyApi {
    /// Retrieves up to [`MAX_ARTIST_IDS`] artists in a single request.
    ///
    /// Ids Spotify does not know are returned as `null` and silently dropped.
    pub async fn several_artists(
        &self,
        token: &str,
        ids: &[String],
    ) -> Result<Vec<Artist>, ApiError> {
        let joined = ids.join(",");
        let res: SeveralArtistsResponse = self
            .get_json(token, "artists", &[("ids", joined.as_str())])
            .await?;

        Ok(res.artists.into_iter().flatten().collect())
    }

    /// Looks up the primary genre of every given artist.
    ///
    /// Ids are split into batches of [`MAX_ARTIST_IDS`] which are requested
    /// concurrently. The first failing batch fails the whole lookup. The
    /// returned map holds the first reported genre of each artist, or
    /// [`UNKNOWN_GENRE`] when Spotify reports none.
    pub async fn primary_genres(
        &self,
        token: &str,
        artist_ids: &[String],
    ) -> Result<HashMap<String, String>, ApiError> {
        let batches = artist_ids
            .chunks(MAX_ARTIST_IDS)
            .map(|chunk| self.several_artists(token, chunk));

        let results = try_join_all(batches).await?;

        Ok(results
            .into_iter()
            .flatten()
            .map(|artist| {
                let genre = primary_genre(&artist).to_string();
                (artist.id, genre)
            })
            .collect())
    }
}

/// First genre Spotify lists for the artist, or [`UNKNOWN_GENRE`].
pub fn primary_genre(artist: &Artist) -> &str {
    artist
        .genres
        .first()
        .map(String::as_str)
        .unwrap_or(UNKNOWN_GENRE)
}
