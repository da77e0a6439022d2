//! The score-to-grade step function.
//!
//! A [`Grader`] owns an ordered list of grade labels and the strictly
//! ascending cutoffs that separate them. Each cutoff is the inclusive lower
//! bound of the band above it, so a score exactly equal to a cutoff earns
//! the higher grade.

use std::collections::HashSet;
use std::sync::OnceLock;

use thiserror::Error;

/// A configuration the grader refused. Validation is all-or-nothing; no
/// partially constructed [`Grader`] ever exists.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("number of cutoffs ({cutoffs}) must be one less than the number of labels ({labels})")]
    CutoffCountMismatch { labels: usize, cutoffs: usize },

    #[error("labels cannot contain duplicates ({label:?} appears more than once)")]
    DuplicateLabel { label: String },

    #[error("cutoffs must be strictly ascending ({next} follows {prev})")]
    CutoffsNotAscending { prev: f64, next: f64 },

    #[error("lowest cutoff ({cutoff}) must be greater than minimum allowed score ({min_score})")]
    LowerBoundViolation { cutoff: f64, min_score: f64 },

    #[error("highest cutoff ({cutoff}) must be less than maximum allowed score ({max_score})")]
    UpperBoundViolation { cutoff: f64, max_score: f64 },
}

/// A score the grader refused. The instance stays valid for later calls.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("score must be finite (got {score})")]
    NonFinite { score: f64 },

    #[error("score ({score}) < minimum ({min_score})")]
    BelowMinimum { score: f64, min_score: f64 },

    #[error("score ({score}) > maximum ({max_score})")]
    AboveMaximum { score: f64, max_score: f64 },
}

/// Score-to-grade calculator.
///
/// Usable for any monotonic step function from scores to labels. Immutable
/// once constructed, so a single instance can be shared freely and reused
/// for any number of [`grade`](Grader::grade) calls.
#[derive(Debug)]
pub struct Grader {
    labels: Vec<String>,
    cutoffs: Vec<f64>,
    min_score: f64,
    max_score: f64,
    description: OnceLock<String>,
}

impl Grader {
    /// Labels of the default five-band scheme, lowest band first.
    pub const DEFAULT_LABELS: [&'static str; 5] = ["F", "D", "C", "B", "A"];

    /// Cutoffs of the default scheme; each is the lowest score of the band
    /// above it (60 is the lowest D, 90 the lowest A).
    pub const DEFAULT_CUTOFFS: [f64; 4] = [60.0, 70.0, 80.0, 90.0];

    /// Builds a grader from a validated configuration.
    ///
    /// `labels` are ordered lowest band first. `cutoffs` holds the inclusive
    /// lower bound of every band after the first, so it must be one element
    /// shorter than `labels` and strictly ascending. `min_score` and
    /// `max_score` may be infinite to leave the domain unbounded; finite
    /// bounds must strictly bracket the cutoffs.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first violated invariant.
    pub fn new(
        labels: Vec<String>,
        cutoffs: Vec<f64>,
        min_score: f64,
        max_score: f64,
    ) -> Result<Self, ConfigError> {
        if cutoffs.len() + 1 != labels.len() {
            return Err(ConfigError::CutoffCountMismatch {
                labels: labels.len(),
                cutoffs: cutoffs.len(),
            });
        }

        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        for pair in cutoffs.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ConfigError::CutoffsNotAscending {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        if let Some(&first) = cutoffs.first() {
            if first <= min_score {
                return Err(ConfigError::LowerBoundViolation {
                    cutoff: first,
                    min_score,
                });
            }
        }

        if let Some(&last) = cutoffs.last() {
            if last >= max_score {
                return Err(ConfigError::UpperBoundViolation {
                    cutoff: last,
                    max_score,
                });
            }
        }

        Ok(Self {
            labels,
            cutoffs,
            min_score,
            max_score,
            description: OnceLock::new(),
        })
    }

    /// Returns the grade label for `score`.
    ///
    /// A score equal to a cutoff lands in the higher band. Scores exactly
    /// equal to `min_score` or `max_score` are valid and map to the lowest
    /// and highest label respectively.
    ///
    /// # Errors
    ///
    /// Returns a [`ScoreError`] if `score` is non-finite or outside the
    /// configured domain. A failed call never affects later ones.
    pub fn grade(&self, score: f64) -> Result<&str, ScoreError> {
        if !score.is_finite() {
            return Err(ScoreError::NonFinite { score });
        }

        if score < self.min_score {
            return Err(ScoreError::BelowMinimum {
                score,
                min_score: self.min_score,
            });
        }

        if score > self.max_score {
            return Err(ScoreError::AboveMaximum {
                score,
                max_score: self.max_score,
            });
        }

        // The first cutoff strictly greater than the score marks the band;
        // cutoffs equal to the score count toward the band below the one
        // we return, which is what puts boundary scores in the higher band.
        let idx = self.cutoffs.partition_point(|&c| c <= score);
        Ok(&self.labels[idx])
    }

    /// Each label paired with its exclusive upper bound, in band order.
    ///
    /// The last label has no cutoff above it and is bounded by `max_score`.
    pub fn mapping(&self) -> Vec<(&str, f64)> {
        let uppers = self
            .cutoffs
            .iter()
            .copied()
            .chain(std::iter::once(self.max_score));

        self.labels.iter().map(String::as_str).zip(uppers).collect()
    }

    /// Human-readable rendering of the mapping and the score domain.
    ///
    /// Computed on first use and cached; the configuration is immutable, so
    /// the cached value can never go stale.
    pub fn describe(&self) -> &str {
        self.description.get_or_init(|| {
            let bands = self
                .mapping()
                .iter()
                .map(|(label, upper)| format!("{label:?}: {upper}"))
                .collect::<Vec<_>>()
                .join(", ");

            format!(
                "Grade Mapping: {{{bands}}}\nMinimum allowed score: {}\nMaximum allowed score: {}",
                self.min_score, self.max_score
            )
        })
    }

    /// Lowest score the grader accepts.
    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Highest score the grader accepts.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}

impl Default for Grader {
    /// The classic F/D/C/B/A scheme over an unbounded score domain.
    fn default() -> Self {
        let labels = Self::DEFAULT_LABELS.iter().map(|s| s.to_string()).collect();
        let cutoffs = Self::DEFAULT_CUTOFFS.to_vec();

        // The built-in scheme satisfies every construction invariant.
        Self::new(labels, cutoffs, f64::NEG_INFINITY, f64::INFINITY)
            .expect("default grading scheme is valid")
    }
}
