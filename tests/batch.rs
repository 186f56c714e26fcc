use {
    pagesim::{
        BatchError,
        InputError,
        Runner,
        batch::{self, Case},
    },
    std::fs,
    tempfile::TempDir,
};

const EXPECTED: &str = concat!(
    "Result for FIFO algorithm:\n",
    "Number of changes: 4\n",
    "Sequence of answers: 0 0 0 0 0 0 0 0 0 1 2 0 0 0 3 4 \n\n",
    "Result for LRU algorithm:\n",
    "Number of changes: 5\n",
    "Sequence of answers: 0 0 0 0 0 0 0 0 0 2 4 0 5 0 1 6 \n\n",
    "Result for OPT algorithm:\n",
    "Number of changes: 3\n",
    "Sequence of answers: 0 0 0 0 0 0 0 0 0 1 5 0 0 0 3 0 \n\n",
);

#[test]
fn process_case() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "6\n1 2 3 4 5 6 1 6 3 8 7 3 4 8 10 2\n").unwrap();

    let case = Case {
        input,
        output: output.clone(),
    };
    case.process(&Runner::default()).unwrap();
    assert_eq!(fs::read_to_string(output).unwrap(), EXPECTED);
}

#[test]
fn failed_case_does_not_stop_others() {
    let dir = TempDir::new().unwrap();
    let path = |name: &str| dir.path().join(name);

    fs::write(path("bad.txt"), "0\n1 2 3\n").unwrap();
    fs::write(path("good.txt"), "1\n1 1 2\n").unwrap();

    let files = vec![
        path("missing.txt"),
        path("out0.txt"),
        path("bad.txt"),
        path("out1.txt"),
        path("good.txt"),
        path("out2.txt"),
    ];
    let cases = Case::from_files(&files).unwrap();
    let summary = batch::process_all(&cases, &Runner::default());

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed.len(), 2);
    assert!(matches!(summary.failed[0], (0, BatchError::Io { .. })));
    assert!(matches!(
        summary.failed[1],
        (1, BatchError::Input(InputError::FrameCountNotPositive(0)))
    ));

    assert!(!path("out0.txt").exists());
    assert!(!path("out1.txt").exists());
    let report = fs::read_to_string(path("out2.txt")).unwrap();
    assert!(report.contains("Result for OPT algorithm:\nNumber of changes: 1\nSequence of answers: 0 0 1 \n"));
}
