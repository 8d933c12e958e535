//! Orbit placement of tracks.
//!
//! Every genre owns a contiguous slice of the full circle, as wide as its
//! share of the tracks, and a spherical shell whose radii grow with that
//! share. Tracks are dropped at random points inside their genre's slice and
//! shell, re-rolling a bounded number of times to keep them apart.
//!
//! The placement is best-effort: when the attempt budget runs out the last
//! candidate is kept even if it overlaps a neighbour.

use std::{
    collections::HashMap,
    f64::consts::{PI, TAU},
};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::Track;

pub const MIN_SEPARATION: f64 = 1.2;
pub const MAX_PLACEMENT_ATTEMPTS: usize = 20;

/// Distance kept from the poles when drawing the polar angle.
pub const POLAR_MARGIN: f64 = PI * 0.15;

const BASE_INNER_RADIUS: f64 = 6.0;
const BASE_OUTER_RADIUS: f64 = 10.0;
const INNER_RADIUS_GROWTH: f64 = 10.0;
const OUTER_RADIUS_GROWTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// `azimuth` is measured in the x/z plane, `polar` from the +y axis.
    pub fn from_spherical(radius: f64, azimuth: f64, polar: f64) -> Self {
        Point3 {
            x: radius * polar.sin() * azimuth.cos(),
            y: radius * polar.cos(),
            z: radius * polar.sin() * azimuth.sin(),
        }
    }

    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn norm(&self) -> f64 {
        self.distance(&Point3::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusBand {
    pub inner: f64,
    pub outer: f64,
}

impl RadiusBand {
    /// Shell for a genre holding `share` (0..=1) of all tracks.
    pub fn for_share(share: f64) -> Self {
        let share = share.clamp(0.0, 1.0);
        RadiusBand {
            inner: BASE_INNER_RADIUS + INNER_RADIUS_GROWTH * share,
            outer: BASE_OUTER_RADIUS + OUTER_RADIUS_GROWTH * share,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreSlice {
    pub genre: String,
    pub count: usize,
    pub share: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl GenreSlice {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    pub fn radius_band(&self) -> RadiusBand {
        RadiusBand::for_share(self.share)
    }
}

/// Splits the circle between the genres present in `tracks`.
///
/// Genres are visited in order of first appearance, so for a score-sorted
/// list the genre of the top track starts at angle 0. The last slice closes
/// the circle exactly, absorbing floating point drift.
pub fn genre_slices(tracks: &[Track]) -> Vec<GenreSlice> {
    slices_in_order(tracks.iter())
}

fn slices_in_order<'a>(tracks: impl Iterator<Item = &'a Track>) -> Vec<GenreSlice> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for track in tracks {
        match index.get(track.genre.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(track.genre.as_str(), counts.len());
                counts.push((track.genre.clone(), 1));
            }
        }
    }

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    let last = counts.len().saturating_sub(1);
    let mut start = 0.0;

    counts
        .into_iter()
        .enumerate()
        .map(|(i, (genre, count))| {
            let share = count as f64 / total as f64;
            let sweep = if i == last { TAU - start } else { TAU * share };
            let slice = GenreSlice {
                genre,
                count,
                share,
                start_angle: start,
                sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Where a single track may be placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub azimuth_start: f64,
    pub azimuth_end: f64,
    pub polar_min: f64,
    pub polar_max: f64,
    pub radius: RadiusBand,
    pub min_separation: f64,
}

impl Placement {
    pub fn for_slice(slice: &GenreSlice) -> Self {
        Placement {
            azimuth_start: slice.start_angle,
            azimuth_end: slice.end_angle(),
            polar_min: POLAR_MARGIN,
            polar_max: PI - POLAR_MARGIN,
            radius: slice.radius_band(),
            min_separation: MIN_SEPARATION,
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Point3 {
        let azimuth = draw(rng, self.azimuth_start, self.azimuth_end);
        let polar = draw(rng, self.polar_min, self.polar_max);
        let radius = draw(rng, self.radius.inner, self.radius.outer);
        Point3::from_spherical(radius, azimuth, polar)
    }
}

fn draw<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..=high)
    } else {
        low
    }
}

/// Picks a position for one track.
///
/// Draws up to `attempts` candidates (at least one) and returns the first
/// that keeps `min_separation` from every point in `existing`. If none does,
/// the last candidate is returned as-is.
pub fn place<R: Rng>(
    existing: &[Point3],
    placement: &Placement,
    attempts: usize,
    rng: &mut R,
) -> Point3 {
    let mut candidate = placement.sample(rng);
    for _ in 1..attempts.max(1) {
        if is_clear(existing, &candidate, placement.min_separation) {
            return candidate;
        }
        candidate = placement.sample(rng);
    }
    candidate
}

fn is_clear(existing: &[Point3], candidate: &Point3, min_separation: f64) -> bool {
    existing
        .iter()
        .all(|p| p.distance(candidate) >= min_separation)
}

/// Position table of one view.
///
/// Positions are keyed by track id and only recomputed when the set of ids
/// changes, so resizing the viewport or reordering the same tracks never
/// reshuffles the scene. Slices and placement walk the tracks in id order
/// with a generator seeded from the id set, so score changes alone never
/// move a sphere and a fresh layout lands every track on the same spot.
#[derive(Debug, Default)]
pub struct OrbitLayout {
    signature: Option<[u8; 32]>,
    positions: HashMap<String, Point3>,
    slices: Vec<GenreSlice>,
}

impl OrbitLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the table in line with `tracks`. Returns whether positions were recomputed.
    pub fn sync(&mut self, tracks: &[Track]) -> bool {
        let signature = track_set_signature(tracks);
        if self.signature == Some(signature) {
            return false;
        }

        let mut seed = [0u8; 8];
        seed.copy_from_slice(&signature[..8]);
        let mut rng = StdRng::seed_from_u64(u64::from_le_bytes(seed));

        let mut ordered: Vec<&Track> = tracks.iter().collect();
        ordered.sort_by(|a, b| a.id.cmp(&b.id));

        self.slices = slices_in_order(ordered.iter().copied());
        self.positions.clear();

        let mut placed: Vec<Point3> = Vec::with_capacity(ordered.len());
        for slice in &self.slices {
            let placement = Placement::for_slice(slice);
            for track in ordered.iter().filter(|t| t.genre == slice.genre) {
                let position = place(&placed, &placement, MAX_PLACEMENT_ATTEMPTS, &mut rng);
                placed.push(position);
                self.positions.insert(track.id.clone(), position);
            }
        }

        self.signature = Some(signature);
        true
    }

    pub fn position(&self, track_id: &str) -> Option<Point3> {
        self.positions.get(track_id).copied()
    }

    pub fn slices(&self) -> &[GenreSlice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn track_set_signature(tracks: &[Track]) -> [u8; 32] {
    let mut ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();

    let mut hasher = Sha256::new();
    for id in ids {
        hasher.update(id.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().into()
}
