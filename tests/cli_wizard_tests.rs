//! Full-binary wizard runs driven by scripted prompt answers.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn intake_cli(home: &TempDir, inputs: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("intake_cli").expect("binary built");
    cmd.env("INTAKE_CORE_HOME", home.path())
        .env("INTAKE_TEST_INPUTS", inputs.join("|"));
    cmd
}

#[test]
fn manager_application_completes_in_one_pass() {
    let home = TempDir::new().expect("temp home");
    let inputs = [
        "Jane Doe",
        "j@x.com",
        "5551234",
        "Manager",
        "Led a team of 5",
        "Python",
        "2099-01-01T09:00",
    ];

    intake_cli(&home, &inputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Form Submitted Successfully"))
        .stdout(predicate::str::contains("Full Name: Jane Doe"))
        .stdout(predicate::str::contains(
            "Management Experience: Led a team of 5",
        ))
        .stdout(predicate::str::contains("Additional Skills: Python"))
        .stdout(predicate::str::contains(
            "Preferred Interview Time: 2099-01-01 09:00",
        ));
}

#[test]
fn invalid_first_pass_surfaces_errors_then_accepts_the_corrections() {
    let home = TempDir::new().expect("temp home");
    let inputs = [
        // First pass: several invalid answers.
        "",
        "bad-email",
        "letters",
        "Developer",
        "0",
        "React",
        "2010-01-01T00:00",
        // Second pass re-prompts only the failed fields, in field order.
        "Sam Park",
        "sam@dev.io",
        "5559876",
        "7",
        "2099-06-01T10:00",
    ];

    intake_cli(&home, &inputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Full Name: Full Name is required"))
        .stdout(predicate::str::contains("Email is invalid"))
        .stdout(predicate::str::contains("Phone Number must be a valid number"))
        .stdout(predicate::str::contains(
            "Relevant Experience must be greater than 0",
        ))
        .stdout(predicate::str::contains(
            "Preferred Interview Time must be a future date/time",
        ))
        .stdout(predicate::str::contains("Form Submitted Successfully"))
        .stdout(predicate::str::contains("Relevant Experience (years): 7"));
}

#[test]
fn exhausted_script_aborts_instead_of_hanging() {
    let home = TempDir::new().expect("temp home");
    let inputs = ["Jane Doe"];

    intake_cli(&home, &inputs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scripted input exhausted"));
}
