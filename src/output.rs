//! Output formatting for grader configuration.
//!
//! Supports pretty-printing the resolved mapping and JSON serialization.

use anyhow::Result;
use serde::Serialize;

use crate::grader::Grader;

/// One band of the resolved mapping.
///
/// `upper_bound` is `None` when the band extends without limit.
#[derive(Debug, Serialize)]
pub struct Band<'a> {
    pub label: &'a str,
    pub upper_bound: Option<f64>,
}

/// JSON view of a grader: every band with its exclusive upper bound plus
/// the accepted score domain. Infinite bounds serialize as `null`.
#[derive(Debug, Serialize)]
pub struct MappingView<'a> {
    pub bands: Vec<Band<'a>>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
}

impl<'a> MappingView<'a> {
    pub fn from_grader(grader: &'a Grader) -> Self {
        let bands = grader
            .mapping()
            .into_iter()
            .map(|(label, upper)| Band {
                label,
                upper_bound: finite(upper),
            })
            .collect();

        Self {
            bands,
            min_score: finite(grader.min_score()),
            max_score: finite(grader.max_score()),
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Prints the human-readable description of a grader to stdout.
pub fn print_pretty(grader: &Grader) {
    println!("{}", grader.describe());
}

/// Prints the resolved mapping as pretty JSON to stdout.
pub fn print_json(grader: &Grader) -> Result<()> {
    let view = MappingView::from_grader(grader);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
