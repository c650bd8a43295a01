use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn inserting_a_contact() {
    // Insert a contact, then display it
    Command::cargo_bin("phonebook")
        .unwrap()
        .write_stdin("1\nAlice\n08031234567\n3\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Alice"))
        .stdout(predicate::str::contains("Alice: 08031234567"));
}

#[test]
fn inserting_duplicates_keeps_both_records() {
    // Same name twice produces two records, in insertion order
    Command::cargo_bin("phonebook")
        .unwrap()
        .write_stdin("1\nAlice\n111\n1\nAlice\n222\n3\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice: 111\nAlice: 222"));
}

#[test]
fn empty_name_is_rejected() {
    // Empty name aborts the insert; the phonebook stays empty
    Command::cargo_bin("phonebook")
        .unwrap()
        .write_stdin("1\n\n3\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name cannot be empty."))
        .stdout(predicate::str::contains("Phonebook is empty."));
}

#[test]
fn phone_number_is_stored_as_given() {
    // Free-form phone text is accepted without validation
    Command::cargo_bin("phonebook")
        .unwrap()
        .write_stdin("1\nAlice\next. 42 (office)\n2\nAlice\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact found: Name = Alice, Phone Number = ext. 42 (office)",
        ));
}

#[test]
fn invalid_menu_choice_reprompts() {
    Command::cargo_bin("phonebook")
        .unwrap()
        .write_stdin("9\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized menu choice: '9'"))
        .stdout(predicate::str::contains("Bye!"));
}
