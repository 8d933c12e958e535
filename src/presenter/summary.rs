use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AggregationResult, Track};

pub const TOP_GENRES: usize = 3;
pub const TOP_SONGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistCount {
    pub artist_id: String,
    pub artist_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongEntry {
    pub name: String,
    pub artist_name: String,
    pub listen_score: u32,
    pub popularity: u32,
    pub album_image: String,
}

impl From<&Track> for SongEntry {
    fn from(track: &Track) -> Self {
        SongEntry {
            name: track.name.clone(),
            artist_name: track.artist_name.clone(),
            listen_score: track.listen_score,
            popularity: track.popularity,
            album_image: track.album_image.clone(),
        }
    }
}

/// Everything shown on the shareable card.
///
/// `most_popular` and `least_popular` go by Spotify's raw popularity, not
/// by listen score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub top_genres: Vec<GenreCount>,
    pub top_songs: Vec<SongEntry>,
    pub top_artist: Option<ArtistCount>,
    pub most_popular: Option<SongEntry>,
    pub least_popular: Option<SongEntry>,
    pub obscurity_rating: u32,
    pub track_count: usize,
}

pub fn summarize(result: &AggregationResult) -> Summary {
    let tracks = &result.tracks;

    let mut top_genres: Vec<GenreCount> = count_in_order(tracks.iter().map(|t| t.genre.as_str()))
        .into_iter()
        .map(|(genre, count)| GenreCount { genre, count })
        .collect();
    top_genres.sort_by(|a, b| b.count.cmp(&a.count));
    top_genres.truncate(TOP_GENRES);

    let mut by_score: Vec<&Track> = tracks.iter().collect();
    by_score.sort_by(|a, b| b.listen_score.cmp(&a.listen_score));
    let top_songs = by_score.into_iter().take(TOP_SONGS).map(SongEntry::from).collect();

    // counted by id so namesakes stay apart; first to reach the top count wins ties
    let top_artist = count_in_order(
        tracks
            .iter()
            .map(|t| t.artist_id.as_str())
            .filter(|id| !id.is_empty()),
    )
    .into_iter()
    .fold(None::<(String, usize)>, |best, (id, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((id, count)),
    })
    .and_then(|(artist_id, count)| {
        let artist_name = tracks.iter().find(|t| t.artist_id == artist_id)?.artist_name.clone();
        Some(ArtistCount {
            artist_id,
            artist_name,
            count,
        })
    });

    let most_popular = tracks
        .iter()
        .reduce(|best, t| if t.popularity > best.popularity { t } else { best })
        .map(SongEntry::from);
    let least_popular = tracks
        .iter()
        .reduce(|best, t| if t.popularity < best.popularity { t } else { best })
        .map(SongEntry::from);

    Summary {
        top_genres,
        top_songs,
        top_artist,
        most_popular,
        least_popular,
        obscurity_rating: result.obscurity_rating,
        track_count: tracks.len(),
    }
}

/// Occurrence counts in order of first appearance.
fn count_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}
