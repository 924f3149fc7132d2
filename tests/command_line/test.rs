use predicates::prelude::*;

use crate::command_line::utmatrix;
use crate::import::get_test_file_path;

#[test]
fn print() {
    utmatrix()
        .arg("print")
        .arg(get_test_file_path("order_3"))
        .assert()
        .success()
        .stdout("3\n10 0 0\n20 0\n0\n");
}

#[test]
fn print_float() {
    utmatrix()
        .args(["print", "--float"])
        .arg(get_test_file_path("order_2_float"))
        .assert()
        .success()
        .stdout("2\n0.5 -1.25\n3\n");
}

#[test]
fn add_and_sub() {
    utmatrix()
        .arg("add")
        .arg(get_test_file_path("order_3"))
        .arg(get_test_file_path("order_3_shifted"))
        .assert()
        .success()
        .stdout("3\n11 2 3\n24 5\n6\n");

    utmatrix()
        .arg("sub")
        .arg(get_test_file_path("order_3"))
        .arg(get_test_file_path("order_3_shifted"))
        .assert()
        .success()
        .stdout("3\n9 -2 -3\n16 -5\n-6\n");
}

#[test]
fn missing_right() {
    utmatrix()
        .arg("sub")
        .arg(get_test_file_path("order_3"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("needs a second matrix").count(1));
}

#[test]
fn order_mismatch() {
    utmatrix()
        .arg("add")
        .arg(get_test_file_path("order_3"))
        .arg(get_test_file_path("order_2"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("shape mismatch: operands have sizes 3 and 2").count(1));
}

#[test]
fn float_needs_flag() {
    utmatrix()
        .arg("print")
        .arg(get_test_file_path("order_2_float"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse value text \"0.5\"").count(1));
}

#[test]
fn bad_value() {
    utmatrix()
        .arg("print")
        .arg(get_test_file_path("bad_value"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read row 1").count(1))
        .stderr(predicate::str::contains("line\t3").count(1));
}

#[test]
fn missing_file() {
    utmatrix()
        .arg("print")
        .arg(get_test_file_path("does_not_exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Couldn't read matrix file").count(1))
        .stderr(predicate::str::contains("os error").count(1));
}

#[test]
fn help() {
    utmatrix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic on upper triangular matrices"))
        .stdout(predicate::str::contains("vandenheuvel").not());

    utmatrix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("utmatrix 0.1.0"));
}
