use crate::types::SENTINEL_RANK;

pub const DEFAULT_SHORT_WEIGHT: f64 = 0.30;
pub const DEFAULT_MEDIUM_WEIGHT: f64 = 0.35;
pub const DEFAULT_LONG_WEIGHT: f64 = 0.35;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Per-window weights of the listen score.
///
/// Weights are non-negative and sum to 1, so a track ranked first in every
/// window scores 99 and a track missing from every window scores
/// `100 - SENTINEL_RANK`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    short: f64,
    medium: f64,
    long: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            short: DEFAULT_SHORT_WEIGHT,
            medium: DEFAULT_MEDIUM_WEIGHT,
            long: DEFAULT_LONG_WEIGHT,
        }
    }
}

impl ScoreWeights {
    pub fn new(short: f64, medium: f64, long: f64) -> Result<Self, String> {
        if [short, medium, long]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err("weights must be finite and non-negative".to_string());
        }

        let sum = short + medium + long;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("weights must sum to 1, got {}", sum));
        }

        Ok(ScoreWeights {
            short,
            medium,
            long,
        })
    }

    pub fn short(&self) -> f64 {
        self.short
    }

    pub fn medium(&self) -> f64 {
        self.medium
    }

    pub fn long(&self) -> f64 {
        self.long
    }

    pub fn sum(&self) -> f64 {
        self.short + self.medium + self.long
    }
}

/// Ranks of a track in the short, medium and long windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranks {
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

impl Default for Ranks {
    fn default() -> Self {
        Ranks {
            short: SENTINEL_RANK,
            medium: SENTINEL_RANK,
            long: SENTINEL_RANK,
        }
    }
}

/// Weighted sum of `100 - rank` over the three windows, rounded.
///
/// Non-increasing in every rank. Ranks above 100 contribute nothing rather
/// than pulling the score below zero.
pub fn listen_score(ranks: Ranks, weights: &ScoreWeights) -> u32 {
    let points = |rank: u32| 100.0 - f64::from(rank.min(100));

    let score = weights.short * points(ranks.short)
        + weights.medium * points(ranks.medium)
        + weights.long * points(ranks.long);

    score.round() as u32
}
