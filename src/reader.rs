//! Input acquisition and the line-by-line grading loop.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::grader::Grader;
use crate::parser::parse_score;

/// Counters for one pass over an input stream.
#[derive(Debug, Default, PartialEq)]
pub struct GradeSummary {
    /// Lines read from the stream.
    pub lines: usize,
    /// Lines that produced a grade label.
    pub graded: usize,
    /// Lines that did not parse as an integer score.
    pub malformed: usize,
    /// Parsed scores the grader refused (outside the configured domain).
    pub rejected: usize,
}

/// Opens `path` for buffered line reading, or stdin when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Grades every line of `input`, writing one label per graded line to `out`.
///
/// Malformed lines and out-of-range scores are logged with their line
/// number and skipped; the stream keeps going. Only a read or write failure
/// aborts the pass.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn grade_lines<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    grader: &Grader,
) -> Result<GradeSummary> {
    let mut summary = GradeSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.with_context(|| format!("read failure on input line {line_number}"))?;
        summary.lines += 1;

        let score = match parse_score(&line) {
            Ok(score) => score,
            Err(e) => {
                warn!(line = line_number, "Error on input line: {e:#}");
                summary.malformed += 1;
                continue;
            }
        };

        match grader.grade(score as f64) {
            Ok(label) => {
                writeln!(out, "{label}")?;
                summary.graded += 1;
            }
            Err(e) => {
                warn!(line = line_number, score, "Score rejected: {e}");
                summary.rejected += 1;
            }
        }
    }

    debug!(?summary, "Input stream consumed");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bounded_grader() -> Grader {
        Grader::new(
            Grader::DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            Grader::DEFAULT_CUTOFFS.to_vec(),
            0.0,
            100.0,
        )
        .unwrap()
    }

    fn run(input: &str, grader: &Grader) -> (String, GradeSummary) {
        let mut out = Vec::new();
        let summary = grade_lines(Cursor::new(input), &mut out, grader).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_grades_each_line() {
        let (output, summary) = run("49\n60\n75\n90\n", &Grader::default());

        assert_eq!(output, "F\nD\nC\nA\n");
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.graded, 4);
        assert_eq!(summary.malformed, 0);
        assert_eq!(summary.rejected, 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let (output, summary) = run("88\nseventy\n\n42\n", &Grader::default());

        assert_eq!(output, "B\nF\n");
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.graded, 2);
        assert_eq!(summary.malformed, 2);
    }

    #[test]
    fn test_out_of_range_scores_are_skipped() {
        let (output, summary) = run("-5\n95\n200\n", &bounded_grader());

        assert_eq!(output, "A\n");
        assert_eq!(summary.graded, 1);
        assert_eq!(summary.rejected, 2);
    }

    #[test]
    fn test_empty_stream() {
        let (output, summary) = run("", &Grader::default());

        assert!(output.is_empty());
        assert_eq!(summary, GradeSummary::default());
    }

    #[test]
    fn test_open_input_missing_file() {
        let result = open_input(Some(Path::new("/no/such/score/file.txt")));
        assert!(result.is_err());
    }
}
