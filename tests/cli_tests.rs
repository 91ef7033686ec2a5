mod common;

use common::run_lectern;

#[test]
fn lectern_help_shows_usage() {
    let output = run_lectern(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("feedback"));
    assert!(stdout.contains("critique"));
}

#[test]
fn lectern_version_shows_version() {
    let output = run_lectern(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("lectern "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_lectern(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("lectern"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works() {
    let output = run_lectern(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("gpt-4o-mini"));
    assert!(stdout.contains("[analysis]"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_lectern(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config path should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let env = common::TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(
        first.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&first.stderr)
    );

    let second = env.run(&["config", "init"]);
    assert!(
        !second.status.success(),
        "config init should refuse to overwrite\nstdout:\n{}",
        String::from_utf8_lossy(&second.stdout)
    );
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));
}
