use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_OVERRIDES: &[&str] = &[
    "FAILOVER_RESET_TIMEOUT_MS",
    "FAILOVER_MAX_ATTEMPTS",
    "FAILOVER_CLOSE_ON_RECOVERY",
];

fn failover() -> Command {
    let mut cmd = Command::cargo_bin("failover").unwrap();
    for var in ENV_OVERRIDES {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_demo_fails_over_while_open() {
    failover()
        .args([
            "demo",
            "--calls",
            "3",
            "--failures",
            "3",
            "--max-attempts",
            "3",
            "--interval-ms",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("call 1: Fail-over called [open]"))
        .stdout(predicate::str::contains("call 3: Fail-over called [open]"))
        .stdout(predicate::str::contains(
            "primary calls: 3, failover calls: 3",
        ));
}

#[test]
fn test_demo_healthy_service_stays_closed() {
    failover()
        .args(["demo", "--calls", "2", "--failures", "0", "--interval-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "call 2: Service Under Load called. [closed]",
        ))
        .stdout(predicate::str::contains(
            "primary calls: 2, failover calls: 0",
        ));
}

#[test]
fn test_demo_probe_after_cooldown() {
    failover()
        .args([
            "demo",
            "--calls",
            "2",
            "--failures",
            "3",
            "--max-attempts",
            "3",
            "--reset-timeout-ms",
            "50",
            "--interval-ms",
            "200",
            "--close-on-recovery",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "call 2: Service Under Load called. [closed]",
        ))
        .stdout(predicate::str::contains(
            "primary calls: 4, failover calls: 1",
        ));
}

#[test]
fn test_demo_reads_settings_file() {
    let file = settings_file(r#"{ "maxAttempts": 2, "resetTimeoutMs": 60000 }"#);

    failover()
        .args(["demo", "--calls", "1", "--failures", "5", "--interval-ms", "0"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "primary calls: 2, failover calls: 1",
        ));
}

#[test]
fn test_config_prints_effective_settings() {
    let file = settings_file(r#"{ "maxAttempts": 4 }"#);

    failover()
        .arg("config")
        .arg("--config")
        .arg(file.path())
        .args(["--reset-timeout-ms", "2000"])
        .env("FAILOVER_CLOSE_ON_RECOVERY", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""maxAttempts": 4"#))
        .stdout(predicate::str::contains(r#""resetTimeoutMs": 2000"#))
        .stdout(predicate::str::contains(r#""closeOnRecovery": true"#));
}

#[test]
fn test_zero_attempts_is_rejected() {
    failover()
        .args(["config", "--max-attempts", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maxAttempts must be at least 1"));
}

#[test]
fn test_flag_replaces_invalid_env_value() {
    failover()
        .args(["config", "--max-attempts", "2"])
        .env("FAILOVER_MAX_ATTEMPTS", "0")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""maxAttempts": 2"#));
}

#[test]
fn test_flag_replaces_invalid_file_value() {
    let file = settings_file(r#"{ "maxAttempts": 0 }"#);

    failover()
        .arg("config")
        .arg("--config")
        .arg(file.path())
        .args(["--max-attempts", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""maxAttempts": 3"#));
}

#[test]
fn test_close_on_recovery_flag_can_disable() {
    failover()
        .args(["config", "--close-on-recovery", "false"])
        .env("FAILOVER_CLOSE_ON_RECOVERY", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""closeOnRecovery": false"#));
}
