use serde::{Deserialize, Serialize};

use crate::{
    presenter::{
        color::genre_color,
        orbit::{GenreSlice, OrbitLayout, Point3},
        sizing::sphere_radius,
    },
    types::Track,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedTrack {
    #[serde(flatten)]
    pub track: Track,
    pub position: Point3,
    pub color: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub tracks: Vec<PositionedTrack>,
    pub slices: Vec<GenreSlice>,
}

/// Builds the drawable scene for `tracks`, syncing `layout` first.
///
/// Positions come from the layout's table, so calling this again with the
/// same tracks and a different viewport only changes sphere sizes.
pub fn build_scene(layout: &mut OrbitLayout, tracks: &[Track], viewport_width: f64) -> Scene {
    layout.sync(tracks);

    let tracks = tracks
        .iter()
        .map(|track| PositionedTrack {
            position: layout.position(&track.id).unwrap_or_default(),
            color: genre_color(&track.genre).to_string(),
            size: sphere_radius(track.listen_score, viewport_width),
            track: track.clone(),
        })
        .collect();

    Scene {
        tracks,
        slices: layout.slices().to_vec(),
    }
}
