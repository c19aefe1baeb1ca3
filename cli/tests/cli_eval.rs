use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn numkit() -> Command {
    let mut cmd = Command::cargo_bin("numkit").unwrap();
    cmd.arg("-c").arg("tests/config_for_tests.toml");
    cmd
}

#[test]
fn test_factor() {
    numkit()
        .arg("factor 360")
        .assert()
        .success()
        .stdout(predicate::eq("> factor 360\n360 = 2^3 * 3^2 * 5\n"));
}

#[test]
fn test_split_args() {
    numkit()
        .args(["prime", "17", "18", "97"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "> prime 17\n17 is prime\n> 18\n18 = 2 * 3^2\n> 97\n97 = 97\n",
        ));
}

#[test]
fn test_not_prime() {
    numkit()
        .arg("prime 18")
        .assert()
        .success()
        .stdout(predicate::eq("> prime 18\n18 is not prime (divisible by 2)\n"));
}

#[test]
fn test_edge_cases_strict() {
    numkit()
        .args(["prime 1", "factor 1"])
        .assert()
        .success()
        .stdout(predicate::eq("> prime 1\n1 is not prime\n> factor 1\n1 = 1\n"));
}

#[test]
fn test_edge_cases_legacy() {
    numkit()
        .arg("--legacy")
        .args(["prime 0", "prime 1", "prime 2"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "> prime 0\n0 is prime\n> prime 1\n1 is prime\n> prime 2\n2 is prime\n",
        ));
}

#[test]
fn test_invalid_argument() {
    numkit()
        .args(["factor", "-12"])
        .assert()
        .failure()
        .stdout(predicate::eq(
            "> factor -12\nInvalid argument -12: expected an integer of at least 1\n",
        ));
}

#[test]
fn test_invalid_query() {
    numkit()
        .arg("fizzbuzz")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown command `fizzbuzz`"));
}

#[test]
fn test_json() {
    numkit()
        .arg("--json")
        .args(["factor 12", "prime 9", "factor 0"])
        .assert()
        .failure()
        .stdout(predicate::eq(concat!(
            r#"{"factors":[2,2,3],"n":12,"powers":[[2,2],[3,1]],"query":"factor 12"}"#,
            "\n",
            r#"{"divisor":3,"n":9,"prime":false,"query":"prime 9"}"#,
            "\n",
            r#"{"error":"Invalid argument 0: expected an integer of at least 1","query":"factor 0"}"#,
            "\n",
        )));
}

#[test]
fn test_invalid_config() {
    let mut cmd = Command::cargo_bin("numkit").unwrap();
    cmd.arg("-c")
        .arg("config_that_doesnt_exist.toml")
        .arg("360")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to read provided config file `config_that_doesnt_exist.toml`",
        ));
}

#[test]
fn test_malformed_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[numbers]\npolicy = \"lenient\"").unwrap();

    let mut cmd = Command::cargo_bin("numkit").unwrap();
    cmd.arg("-c")
        .arg(file.path())
        .arg("360")
        .assert()
        .failure()
        .stderr(predicate::str::contains("While parsing config.toml"));
}

#[test]
fn test_config_file_policy() {
    let mut cmd = Command::cargo_bin("numkit").unwrap();
    cmd.arg("-c")
        .arg("tests/legacy_config.toml")
        .args(["prime 1", "factor 1"])
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            r#"{"divisor":null,"n":1,"prime":true,"query":"prime 1"}"#,
            "\n",
            r#"{"factors":[1],"n":1,"powers":[[1,1]],"query":"factor 1"}"#,
            "\n",
        )));
}

#[test]
fn test_run_file() {
    numkit()
        .arg("-f")
        .arg("tests/example.queries")
        .assert()
        .success()
        .stdout(predicate::eq("97 is prime\n360 = 2^3 * 3^2 * 5\n1 = 1\n"));
}

#[test]
fn test_run_stdin() {
    numkit()
        .arg("-f")
        .arg("-")
        .write_stdin("prime 91\nfactor x\n")
        .assert()
        .failure()
        .stdout(predicate::eq(
            "91 is not prime (divisible by 7)\nExpected an integer, got `x`\n",
        ));
}

#[test]
fn test_run_stdin_invalid_utf8() {
    numkit()
        .arg("-f")
        .arg("-")
        .write_stdin(&b"prime 7\n\xff\nprime 11\n"[..])
        .assert()
        .failure()
        .stdout(predicate::eq(
            "7 is prime\nLine is not valid UTF-8\n11 is prime\n",
        ));
}

#[test]
fn test_run_stdin_invalid_utf8_json() {
    numkit()
        .args(["--json", "-f", "-"])
        .write_stdin(&b"\xff\r\n5\n"[..])
        .assert()
        .failure()
        .stdout(predicate::eq(concat!(
            r#"{"error":"Line is not valid UTF-8","query":"�"}"#,
            "\n",
            r#"{"factors":[5],"n":5,"powers":[[5,1]],"query":"5"}"#,
            "\n",
        )));
}
