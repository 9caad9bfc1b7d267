//! End-to-end runs over documents on disk

use std::fs;
use std::path::PathBuf;

use spmat::{
    Error, ErrorCategory, FormatIssue, Job, MatrixFile, Operation, RunConfig, SpmatError,
};
use tempfile::TempDir;

fn write_doc(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn run_to_string(job: &Job) -> Result<String, Error> {
    let mut sink = Vec::new();
    job.execute(None, &mut sink)?;
    Ok(String::from_utf8(sink).unwrap())
}

#[test]
fn multiply_identity_like() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_doc(&dir, "a.txt", "rows=2\ncols=2\n(0,0,1)\n(1,1,1)\n");
    let b = write_doc(&dir, "b.txt", "rows=2\ncols=2\n(0,1,7)\n");

    let out = run_to_string(&Job::new(Operation::Multiply, &a, &b)).unwrap();
    assert_eq!(out, "Result of multiply:\nrows=2\ncols=2\n(0, 1, 7)\n");
}

#[test]
fn add_and_subtract_documents() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_doc(&dir, "a.txt", "rows=3\ncols=3\n(0,0,5)\n(1,2,10)\n(2,1,3)\n");
    let b = write_doc(&dir, "b.txt", "rows=3\ncols=3\n\n(0,0,-5)\n(2,2,4)\n");
    let unlabeled = RunConfig::default().with_label(false);

    let sum = Job::new(Operation::Add, &a, &b).with_config(unlabeled.clone());
    assert_eq!(
        run_to_string(&sum).unwrap(),
        "rows=3\ncols=3\n(1, 2, 10)\n(2, 1, 3)\n(2, 2, 4)\n"
    );

    let diff = Job::new(Operation::Subtract, &a, &a).with_config(unlabeled);
    assert_eq!(run_to_string(&diff).unwrap(), "rows=3\ncols=3\n");
}

#[test]
fn output_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_doc(&dir, "a.txt", "rows=2\ncols=3\n(0,2,2)\n(1,0,-1)\n");
    let b = write_doc(&dir, "b.txt", "rows=3\ncols=2\n(2,1,5)\n(0,0,4)\n");
    let out = dir.path().join("out.txt");

    let job = Job::new(Operation::Multiply, &a, &b)
        .with_config(RunConfig::default().with_label(false));
    let mut sink = Vec::new();
    job.execute(Some(&out), &mut sink).unwrap();
    assert!(sink.is_empty());

    let result = MatrixFile::open(&out).unwrap().document;
    assert_eq!((result.dims.rows, result.dims.cols), (2, 2));
    let triples: Vec<_> = result
        .entries
        .iter()
        .map(|e| (e.row, e.col, e.value))
        .collect();
    assert_eq!(triples, vec![(0, 1, 10), (1, 0, -4)]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_doc(&dir, "a.txt", "rows=1\ncols=1\n");
    let missing = dir.path().join("missing.txt");

    let err = run_to_string(&Job::new(Operation::Add, &a, &missing)).unwrap_err();
    assert!(err.is_io());
    assert!(err.matrix_error().is_none());
    match err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_documents_are_format_errors() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_doc(&dir, "good.txt", "rows=1\ncols=1\n(0,0,1)\n");
    let cases = [
        ("x=3\ncols=3\n", FormatIssue::MissingRowsPrefix),
        ("rows=3\nx=3\n", FormatIssue::MissingColsPrefix),
        ("rows=1\ncols=1\n(1,2)\n", FormatIssue::WrongFieldCount),
        ("rows=1\ncols=1\n1,2,3\n", FormatIssue::UnbracketedEntry),
        ("rows=1\ncols=1\n(0,0,abc)\n", FormatIssue::InvalidField),
    ];

    for (i, (text, issue)) in cases.into_iter().enumerate() {
        let bad = write_doc(&dir, &format!("bad{i}.txt"), text);
        let err = run_to_string(&Job::new(Operation::Add, &good, &bad)).unwrap_err();

        assert_eq!(err.matrix_error(), Some(&SpmatError::InvalidFormat(issue)));
        assert!(err.to_string().starts_with("Input file has wrong format"));
    }
}

#[test]
fn dimension_mismatch_reported() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_doc(&dir, "a.txt", "rows=2\ncols=3\n(0,0,1)\n");
    let b = write_doc(&dir, "b.txt", "rows=2\ncols=3\n(1,1,1)\n");

    let add = run_to_string(&Job::new(Operation::Add, &a, &b));
    assert!(add.is_ok());

    let err = run_to_string(&Job::new(Operation::Multiply, &a, &b)).unwrap_err();
    let core = err.matrix_error().copied().unwrap();
    assert_eq!(core.category(), ErrorCategory::Dimension);
    assert_eq!(
        core,
        SpmatError::InnerDimensionMismatch {
            left_cols: 3,
            right_rows: 2
        }
    );
}

#[test]
fn strict_bounds_rejects_outside_entries() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_doc(&dir, "a.txt", "rows=1\ncols=1\n(0,4,1)\n");

    let lenient = Job::new(Operation::Add, &a, &a);
    assert!(run_to_string(&lenient).is_ok());

    let strict = lenient.with_config(RunConfig::default().with_strict_bounds(true));
    let err = run_to_string(&strict).unwrap_err();
    assert_eq!(
        err.matrix_error(),
        Some(&SpmatError::InvalidFormat(FormatIssue::EntryOutOfBounds))
    );
}

#[test]
fn invalid_operation_selector() {
    let err = "divide".parse::<Operation>().unwrap_err();
    assert_eq!(err, SpmatError::InvalidOperation);
    assert_eq!(err.category(), ErrorCategory::Operation);
}

