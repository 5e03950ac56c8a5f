use std::fs;
use std::process::Command;
use storeclient::action::HELP;

fn workdir_with_config() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"url":"localhost","port":8080}"#,
    )
    .unwrap();
    dir
}

fn client() -> Command {
    Command::new(env!("CARGO_BIN_EXE_client"))
}

#[test]
fn missing_config_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = client()
        .current_dir(dir.path())
        .args(&["availability"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unable to read config"), "stdout: {}", stdout);
    assert!(!stdout.contains("Operation:"));
}

#[test]
fn bad_arguments_print_help() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"url":"localhost","port":8080}"#,
    )
    .unwrap();
    let output = client()
        .current_dir(dir.path())
        .args(&["purchase", "3"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), HELP);
}

#[test]
fn empty_orders_dir_exits_with_status_1() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"url":"127.0.0.1","port":1}"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("orders")).unwrap();
    let output = client()
        .current_dir(dir.path())
        .args(&["order"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Operation: ORDER_ITEM\n"));
    assert!(stdout.contains("No files found in ./orders"), "stdout: {}", stdout);
}

#[test]
fn leading_hyphen_tokens_print_help() {
    let dir = workdir_with_config();
    for args in &[&["--error"][..], &["-5"][..], &["--error", "order"][..]] {
        let output = client().current_dir(dir.path()).args(*args).output().unwrap();

        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim_end(),
            HELP,
            "args: {:?}",
            args
        );
    }
}

#[test]
fn options_before_operation_are_applied() {
    let dir = workdir_with_config();
    let output = client()
        .current_dir(dir.path())
        .args(&["-n", "0", "-i", "0", "--burst", "3", "order", "--error"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Operation: ORDER_ITEM\n");
}

#[test]
fn invalid_option_value_exits_with_status_1() {
    let dir = workdir_with_config();
    let output = client()
        .current_dir(dir.path())
        .args(&["--burst", "many", "order", "--error"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
