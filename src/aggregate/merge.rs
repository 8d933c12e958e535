use std::collections::{HashMap, HashSet};

use crate::{
    aggregate::score::{Ranks, ScoreWeights, listen_score},
    spotify::TimeRange,
    types::{SpotifyTrack, Track, UNKNOWN_GENRE},
};

#[derive(Debug, Clone)]
struct MergedTrack {
    id: String,
    name: String,
    artist_name: String,
    artist_id: String,
    external_url: String,
    popularity: u32,
    album_image: String,
    ranks: Ranks,
}

/// Folds the three ranked windows into one record per track id.
///
/// The first window a track shows up in seeds its display fields; later
/// windows only set their own rank. Records keep first-seen order so the
/// final stable sort is deterministic for equal scores.
#[derive(Debug, Default)]
pub struct TrackMerger {
    tracks: Vec<MergedTrack>,
    index: HashMap<String, usize>,
}

impl TrackMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one window, in rank order. Tracks without an id are skipped.
    pub fn add_window(&mut self, range: TimeRange, items: &[SpotifyTrack]) {
        for (position, track) in items.iter().enumerate() {
            let Some(id) = track.id.as_deref() else {
                continue;
            };
            let rank = position as u32 + 1;

            let slot = match self.index.get(id) {
                Some(&slot) => slot,
                None => {
                    let artist = track.primary_artist();
                    self.tracks.push(MergedTrack {
                        id: id.to_string(),
                        name: track.name.clone(),
                        artist_name: artist.map(|a| a.name.clone()).unwrap_or_default(),
                        artist_id: artist.and_then(|a| a.id.clone()).unwrap_or_default(),
                        external_url: track.spotify_url(),
                        popularity: track.popularity,
                        album_image: track.medium_album_image(),
                        ranks: Ranks::default(),
                    });
                    self.index.insert(id.to_string(), self.tracks.len() - 1);
                    self.tracks.len() - 1
                }
            };

            let ranks = &mut self.tracks[slot].ranks;
            match range {
                TimeRange::Short => ranks.short = rank,
                TimeRange::Medium => ranks.medium = rank,
                TimeRange::Long => ranks.long = rank,
            }
        }
    }

    /// Distinct primary-artist ids, in first-seen order.
    pub fn artist_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for track in &self.tracks {
            if !track.artist_id.is_empty() && seen.insert(track.artist_id.as_str()) {
                ids.push(track.artist_id.clone());
            }
        }
        ids
    }

    /// Scores every record, attaches its genre and sorts by score, highest first.
    pub fn finish(self, genres: &HashMap<String, String>, weights: &ScoreWeights) -> Vec<Track> {
        let mut tracks: Vec<Track> = self
            .tracks
            .into_iter()
            .map(|t| {
                let genre = genres
                    .get(&t.artist_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_GENRE.to_string());

                Track {
                    listen_score: listen_score(t.ranks, weights),
                    id: t.id,
                    name: t.name,
                    artist_name: t.artist_name,
                    artist_id: t.artist_id,
                    external_url: t.external_url,
                    popularity: t.popularity,
                    album_image: t.album_image,
                    short_rank: t.ranks.short,
                    medium_rank: t.ranks.medium,
                    long_rank: t.ranks.long,
                    genre,
                }
            })
            .collect();

        // stable: equal scores keep first-seen order
        tracks.sort_by(|a, b| b.listen_score.cmp(&a.listen_score));
        tracks
    }
}
