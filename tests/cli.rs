use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn domain_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn domainlog() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_domainlog"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    domainlog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOMAIN_LOG_FILE"));
}

#[test]
fn prints_invalid_lines_and_summary() {
    let log = domain_log(
        "2023-01-01 alpha.com 10.0.0.1\n\
         2023-01-02 beta.com 999.1.1.1\n\
         2023-01-03 alpha.com 1.2.3.4\n\
         2023-01-04 gamma.com 10.0.0.1garbage\n",
    );

    domainlog()
        .arg(log.path())
        .assert()
        .success()
        .stdout(
            "2 beta.com 999.1.1.1\n\
             \n\
             Total unique domain names: 3\n\
             \n\
             Top 5 domain names with most occurrences:\n\
             alpha.com\n\
             gamma.com\n\
             beta.com\n",
        )
        .stderr("");
}

#[test]
fn rejects_path_that_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();

    domainlog()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(format!("Error: {} is not a file\n", dir.path().display()));
}

#[test]
fn malformed_line_aborts_without_output() {
    let log = domain_log("2023-01-01 alpha.com 999.0.0.1\nonlytwo tokens\n");

    domainlog()
        .arg(log.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: malformed line 2"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let log = domain_log("2023-01-01 alpha.com 10.0.0.1\n");

    domainlog()
        .arg("--verbose")
        .arg(log.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total unique domain names: 1"))
        .stderr(
            predicate::str::contains("Analysis completed successfully")
                .and(predicate::str::contains("Analyzing domain log file"))
                .and(predicate::str::contains("Starting domain log analysis").count(1)),
        );
}
