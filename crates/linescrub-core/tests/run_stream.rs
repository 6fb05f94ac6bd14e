// crates/linescrub-core/tests/run_stream.rs

use std::fs;
use std::io;

use linescrub_core::{run, run_files, LineSink, LineSource, RunStats, ScrubConfig, ScrubError};

fn run_bytes(input: &[u8], max_line_len: usize) -> (linescrub_core::Result<RunStats>, String) {
    let mut sink = LineSink::new(Vec::new());
    let res = run(LineSource::new(input, max_line_len), &mut sink);
    let out = sink.finish().expect("flush vec");
    (res, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn skips_are_counted_and_order_is_kept() {
    let input = b"Good line\nbad\\\n\n It`s OK \r\nlast";
    let (res, out) = run_bytes(input, 1024);

    assert_eq!(out, "good line\nit's ok\nlast\n");
    assert_eq!(
        res.expect("run"),
        RunStats {
            lines_read: 5,
            lines_emitted: 3,
            lines_empty: 1,
            lines_malformed: 1,
        }
    );
}

#[test]
fn line_after_malformed_one_is_still_emitted() {
    let (res, out) = run_bytes(b"bad\\\nNext\n", 1024);
    assert_eq!(out, "next\n");
    assert_eq!(res.expect("run").lines_malformed, 1);
}

#[test]
fn empty_input_writes_nothing() {
    let (res, out) = run_bytes(b"", 1024);
    assert_eq!(out, "");
    assert_eq!(res.expect("run"), RunStats::default());
}

#[test]
fn over_long_line_aborts_after_earlier_output() {
    let (res, out) = run_bytes(b"short\nthis line is too long\nnever\n", 8);
    assert_eq!(out, "short\n");
    assert!(matches!(res, Err(ScrubError::LineTooLong { line: 2, .. })));
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_fatal() {
    let mut sink = LineSink::new(BrokenPipe);
    let res = run(LineSource::new(&b"a\nb\n"[..], 64), &mut sink);
    match res {
        Err(ScrubError::Io { context, source }) => {
            assert_eq!(context, "write output line 1");
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(sink.written(), 0);
}

#[test]
fn run_files_truncates_existing_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");

    fs::write(&input, "Caf&eacute; Society\r\n\"\"\r\nbad\\\r\nDONE;\r\n").expect("write input");
    fs::write(&output, "stale content that must disappear\n").expect("seed output");

    let stats = run_files(&ScrubConfig::new(&input, &output)).expect("run files");

    assert_eq!(fs::read_to_string(&output).expect("read output"), "café society\ndone\n");
    assert_eq!(stats.lines_read, 4);
    assert_eq!(stats.lines_emitted, 2);
    assert_eq!(stats.lines_empty, 1);
    assert_eq!(stats.lines_malformed, 1);
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = ScrubConfig::new(dir.path().join("nope.txt"), dir.path().join("out.txt"));

    match run_files(&cfg) {
        Err(ScrubError::Io { context, source }) => {
            assert!(context.starts_with("open input"), "context: {context}");
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn uncreatable_output_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    fs::write(&input, "x\n").expect("write input");
    let cfg = ScrubConfig::new(&input, dir.path().join("missing-dir").join("out.txt"));

    match run_files(&cfg) {
        Err(ScrubError::Io { context, .. }) => {
            assert!(context.starts_with("create output"), "context: {context}")
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn default_limit_counts_the_terminator() {
    use linescrub_core::config::DEFAULT_MAX_LINE_LEN;

    let mut fits = vec![b'a'; DEFAULT_MAX_LINE_LEN - 1];
    fits.push(b'\n');
    let (res, out) = run_bytes(&fits, DEFAULT_MAX_LINE_LEN);
    assert_eq!(res.expect("run").lines_emitted, 1);
    assert_eq!(out.len(), DEFAULT_MAX_LINE_LEN);

    let mut too_long = vec![b'a'; DEFAULT_MAX_LINE_LEN];
    too_long.push(b'\n');
    let (res, out) = run_bytes(&too_long, DEFAULT_MAX_LINE_LEN);
    assert!(matches!(res, Err(ScrubError::LineTooLong { line: 1, .. })));
    assert_eq!(out, "");
}
