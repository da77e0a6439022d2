use std::io::Cursor;

use score_grader::grader::Grader;
use score_grader::reader::grade_lines;

#[test]
fn test_full_pipeline_default_scheme() {
    let grader = Grader::default();
    let input = "49\n59\n60\n69\n70\n79\n80\n89\n90\n100\nseventy\n-1\n101\n";

    let mut out = Vec::new();
    let summary = grade_lines(Cursor::new(input), &mut out, &grader).expect("stream failed");

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "F\nF\nD\nD\nC\nC\nB\nB\nA\nA\nF\nA\n");

    assert_eq!(summary.lines, 13);
    assert_eq!(summary.graded, 12);
    assert_eq!(summary.malformed, 1);
    assert_eq!(summary.rejected, 0);
}

#[test]
fn test_full_pipeline_custom_bounded_scheme() {
    let grader = Grader::new(
        vec!["fail".to_string(), "pass".to_string(), "merit".to_string()],
        vec![40.0, 75.0],
        0.0,
        100.0,
    )
    .expect("valid configuration");

    let input = "0\n39\n40\n74\n75\n100\n-1\n101\n";

    let mut out = Vec::new();
    let summary = grade_lines(Cursor::new(input), &mut out, &grader).expect("stream failed");

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "fail\nfail\npass\npass\nmerit\nmerit\n");

    assert_eq!(summary.graded, 6);
    assert_eq!(summary.rejected, 2);
}

#[test]
fn test_describe_matches_configuration() {
    let grader = Grader::new(
        vec!["fail".to_string(), "pass".to_string()],
        vec![50.0],
        0.0,
        100.0,
    )
    .expect("valid configuration");

    let description = grader.describe();
    assert!(description.contains("\"fail\": 50"));
    assert!(description.contains("\"pass\": 100"));
    assert!(description.contains("Minimum allowed score: 0"));
    assert!(description.contains("Maximum allowed score: 100"));
}
