mod helpers;

use helpers::{run_cli_in, write_file};

#[test]
fn nothing_to_translate_exits_zero_without_a_backend() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "en.json", r#"{"a": "Hello"}"#);
    write_file(dir.path(), "ja.json", r#"{"a": "こんにちは"}"#);

    let (code, stdout, _) = run_cli_in(
        dir.path(),
        &[
            "merge", "--source", "en.json", "--target", "ja.json", "--lang", "ja",
        ],
    );
    assert_eq!(code, 0, "stdout:\n{stdout}");
    assert!(stdout.contains("Nothing to translate"));
}

#[test]
fn dry_run_reports_gaps_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "en.json", r#"{"a": "Hello", "b": "World"}"#);

    let (code, stdout, _) = run_cli_in(
        dir.path(),
        &[
            "merge", "--source", "en.json", "--target", "ja.json", "--lang", "ja",
            "--dry-run",
        ],
    );
    assert_ne!(code, 0);
    assert!(stdout.contains("DRY-RUN"), "stdout:\n{stdout}");
    assert!(stdout.contains("2 key(s)"));
    assert!(!dir.path().join("ja.json").exists());
}

#[test]
fn deepl_without_key_fails_before_touching_the_target() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "en.json", r#"{"a": "Hello"}"#);

    let (code, _, stderr) = run_cli_in(
        dir.path(),
        &[
            "merge", "--source", "en.json", "--target", "ar.json", "--lang", "ar",
            "--api", "deepl",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("API key"), "stderr:\n{stderr}");
    assert!(!dir.path().join("ar.json").exists());
}

#[test]
fn unknown_backend_kind_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "en.json", r#"{"a": "Hello"}"#);

    let (code, _, stderr) = run_cli_in(
        dir.path(),
        &[
            "merge", "--source", "en.json", "--target", "ar.json", "--lang", "ar",
            "--api", "bing",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("bing"), "stderr:\n{stderr}");
}
