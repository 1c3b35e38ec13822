use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("subtrack_cli").unwrap();
    cmd.env("SUBTRACK_CLI_SCRIPT", "1")
        .env("SUBTRACK_HOME", home);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = tempdir().unwrap();
    let input = "list\n\
                 add-category Consulting #F59E0B\n\
                 add-client NewCo Consulting month hello@newco.dev\n\
                 save\n\
                 exit\n";

    script_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Acme Corporation"))
        .stdout(contains("Added category `Consulting`"))
        .stdout(contains("Added client `NewCo`"));

    let json = std::fs::read_to_string(home.path().join("roster.json")).unwrap();
    assert!(json.contains("\"NewCo\""));
    assert!(json.contains("\"ONE_MONTH\""));
}

#[test]
fn script_mode_reports_payments_and_totals() {
    let home = tempdir().unwrap();
    let input = "add-payment \"Acme Corporation\" 25.50 renewal\n\
                 payments \"Acme Corporation\"\n\
                 exit\n";

    script_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Recorded \u{a3}25.50 payment"))
        .stdout(contains("renewal"))
        .stdout(contains("Total paid: \u{a3}325.49"));
}

#[test]
fn invalid_payment_amounts_are_rejected() {
    let home = tempdir().unwrap();
    let input = "add-payment \"Acme Corporation\" -5\nexit\n";

    script_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Payment amount must be a positive number"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("lst\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `list`?"));
}
