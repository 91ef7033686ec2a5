mod common;

use common::{run_lectern, TestEnv};

#[test]
fn critique_subcommand_is_available() {
    let output = run_lectern(&["critique", "--help"]);

    assert!(
        output.status.success(),
        "critique --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn critique_requires_a_transcript_source() {
    let output = run_lectern(&["critique"]);

    assert!(
        !output.status.success(),
        "critique without --file or --video should fail\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn critique_rejects_both_transcript_sources() {
    let output = run_lectern(&["critique", "--file", "t.txt", "--video", "abc123"]);

    assert!(
        !output.status.success(),
        "critique with both sources should fail\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn critique_reports_missing_transcript_file() {
    let output = run_lectern(&["critique", "--file", "does-not-exist.txt"]);

    assert!(
        !output.status.success(),
        "critique should fail for a missing transcript file\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read transcript"),
        "expected read failure context, got:\n{}",
        stderr
    );
}

#[test]
fn critique_requires_an_api_key() {
    let env = TestEnv::new();
    let transcript = env.write_file("lecture.txt", "Today we cover the cardiac cycle.");

    let output = env.run(&["critique", "--file", transcript.to_str().unwrap()]);

    assert!(
        !output.status.success(),
        "critique without a key should fail\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn transcript_subcommand_is_available() {
    let output = run_lectern(&["transcript", "--help"]);

    assert!(
        output.status.success(),
        "transcript --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
