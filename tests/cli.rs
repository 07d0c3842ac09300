use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn csvdedup(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("csvdedup").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write_input(dir: &Path, content: &str) {
    fs::create_dir_all(dir.join("data")).unwrap();
    fs::write(dir.join("data/animals.csv"), content).unwrap();
}

#[test]
fn test_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "Animal,Legs\nCat,4\nDog,4\nCat,4\n");

    csvdedup(dir.path())
        .assert()
        .success()
        .stdout("Original rows: 3\nRows after removing duplicates: 2\n");

    assert_eq!(
        fs::read_to_string(dir.path().join("data/clean.csv")).unwrap(),
        "Animal,Legs\nCat,4\nDog,4\n"
    );
}

#[test]
fn test_header_only_input() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "Animal,Legs\n");

    csvdedup(dir.path())
        .assert()
        .success()
        .stdout("Original rows: 0\nRows after removing duplicates: 0\n");

    assert_eq!(
        fs::read_to_string(dir.path().join("data/clean.csv")).unwrap(),
        "Animal,Legs\n"
    );
}

#[test]
fn test_missing_key_column() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "Name,Legs\nCat,4\n");

    csvdedup(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("column 'Animal' not found"));

    assert!(!dir.path().join("data/clean.csv").exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();

    csvdedup(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn test_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "Animal,Legs\nCat,4\nDog\n");

    csvdedup(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed data"));

    assert!(!dir.path().join("data/clean.csv").exists());
}

#[test]
fn test_explicit_paths_and_key() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("zoo.tsv"),
        "Keeper\tAnimal\nAnn\tLion\nBob\tLion\nAnn\tZebra\n",
    )
    .unwrap();

    csvdedup(dir.path())
        .args(["--input", "zoo.tsv", "--output", "keepers.tsv", "--key", "Keeper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows after removing duplicates: 2"));

    assert_eq!(
        fs::read_to_string(dir.path().join("keepers.tsv")).unwrap(),
        "Keeper\tAnimal\nAnn\tLion\nBob\tLion\n"
    );
}
