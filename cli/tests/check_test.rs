//! Integration tests for the `check` command.

use assert_cmd::Command;
use expect_test::expect;
use predicates::prelude::*;
use std::io::Write;

fn thiol() -> Command {
    Command::new(env!("CARGO_BIN_EXE_thiol"))
}

fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".thiol")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const VERTEX: &str = "
type Option<T> = record is_some: bool; value: T end
type Pair<A, B> = record first: A; second: B end

type A = record end
type B = A
type C = Option<B>

type Vertex = record
    position: float4 is Point in ObjectSpace;
    colour: float4 is Colour in Linear;
    uv: float2 is Vector in UV;
    additional: Pair<bool, bool>;
end
";

#[test]
fn check_valid_file() {
    let file = temp_file("type A = record x: float3 end");

    thiol()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_multiple_valid_files() {
    let file1 = temp_file("type A = record end");
    let file2 = temp_file("type B = bool");
    let file3 = temp_file("type C = float4 is Colour in Linear");

    thiol()
        .args([
            "check",
            file1.path().to_str().unwrap(),
            file2.path().to_str().unwrap(),
            file3.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK").count(3));
}

#[test]
fn check_dump_type_context() {
    let file = temp_file(VERTEX);

    let output = thiol()
        .args(["check", "--dump-type-context", file.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    expect![[r#"
        A = (0) record end
        B = (0) record end
        C = (2) record
            is_some : (1) bool
            value : (0) record end
        end
        Vertex = (7) record
            position : (3) float4[Point]{ObjectSpace}
            colour : (4) float4[Colour]{Linear}
            uv : (5) float2[Vector]{UV}
            additional : (6) record
                first : (1) bool
                second : (1) bool
            end
        end
    "#]]
    .assert_eq(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn check_stdin() {
    thiol()
        .args(["check", "-"])
        .write_stdin("type A = record end")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>: OK"));
}

#[test]
fn check_cyclic_type() {
    let file = temp_file("type Node = record next: Node end");

    thiol()
        .args(["--no-color", "check", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("type `Node` contains itself"));
}

#[test]
fn check_parse_error() {
    let file = temp_file("type = record end");

    thiol()
        .args(["check", "--no-color", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn check_unknown_type() {
    let file = temp_file("type A = record x: Missing end");

    thiol()
        .args(["check", "--no-color", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined type `Missing`"));
}

#[test]
fn check_quiet_suppresses_output() {
    let good = temp_file("type A = record end");
    let bad = temp_file("type A = Option<bool>");

    thiol()
        .args([
            "check",
            "-q",
            good.path().to_str().unwrap(),
            bad.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_max_depth() {
    let file = temp_file(
        "type Inner<T> = record value: T end
type Mid<T> = record inner: Inner<T> end
type Outer<T> = record mid: Mid<T> end
type X = Outer<int>
",
    );

    thiol()
        .args(["check", "--no-color", "--max-depth", "2", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum depth of 2"));

    thiol()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn check_tagged_record() {
    let file = temp_file("type R = record x: int end\ntype T = R is Point in World");

    thiol()
        .args(["check", "--no-color", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be tagged with `is Point in World`"));
}

#[test]
fn check_missing_file() {
    thiol()
        .args(["check", "/nonexistent/types.thiol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: /nonexistent/types.thiol"));
}
