use serde::{Deserialize, Serialize};

use crate::types::Track;

/// Contents of the overlay shown for the hovered or selected track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetail {
    pub name: String,
    pub artist_name: String,
    pub genre: String,
    pub listen_score: u32,
    pub album_image: Option<String>,
    pub external_url: Option<String>,
}

impl From<&Track> for TrackDetail {
    fn from(track: &Track) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        TrackDetail {
            name: track.name.clone(),
            artist_name: track.artist_name.clone(),
            genre: track.genre.clone(),
            listen_score: track.listen_score,
            album_image: non_empty(&track.album_image),
            external_url: non_empty(&track.external_url),
        }
    }
}

/// Hover/click state of the scene. At most one track is focused at a time.
///
/// A click pins a track until empty space is clicked. Hovering shows the
/// hovered track instead; once the pointer leaves it, focus falls back to
/// the pinned track, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    hovered: Option<String>,
    pinned: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&mut self, track_id: &str) {
        self.hovered = Some(track_id.to_string());
    }

    pub fn pointer_out(&mut self, track_id: &str) {
        if self.hovered.as_deref() == Some(track_id) {
            self.hovered = None;
        }
    }

    pub fn click(&mut self, track_id: &str) {
        self.pinned = Some(track_id.to_string());
        self.hovered = None;
    }

    pub fn click_empty(&mut self) {
        self.pinned = None;
        self.hovered = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.hovered.as_deref().or(self.pinned.as_deref())
    }

    /// True when the focused track is the pinned one.
    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some() && self.current() == self.pinned.as_deref()
    }

    /// Overlay for the focused track, if it is still part of `tracks`.
    pub fn detail(&self, tracks: &[Track]) -> Option<TrackDetail> {
        let id = self.current()?;
        tracks.iter().find(|t| t.id == id).map(TrackDetail::from)
    }
}
