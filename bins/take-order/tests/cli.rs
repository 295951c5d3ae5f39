//! End-to-end tests for the take-order binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const MENU: &str = r#"[
    {"name": "Crunchy Taco", "price": 1.49},
    {"name": "Soft Taco", "price": 1.49},
    {"name": "Burrito", "price": 2.29}
]"#;

const STORES: &str = r#"{"nearByStores": [
    {"storeNumber": "031240", "address": {"line1": "1 Main St", "town": "Irvine", "region": {"isocode": "US-CA"}}},
    {"storeNumber": "031241", "address": {"line1": "9 Oak Ave", "town": "Tustin", "region": {"isocode": "US-CA"}}}
]}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("menu.json"), MENU).unwrap();
        fs::write(dir.path().join("stores.json"), STORES).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("take-order").unwrap();
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_parse_prints_receipt() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["parse", "--menu", "menu.json", "two", "crunchy", "tacos", "and", "a", "burrito"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== YOUR ORDER ==="))
        .stdout(predicate::str::contains("2x crunchy taco - $2.98"))
        .stdout(predicate::str::contains("1x burrito - $2.29"))
        .stdout(predicate::str::contains("TOTAL: $5.27"))
        .stdout(predicate::str::contains("=== ERRORS ===").not());
}

#[test]
fn test_parse_unmatched_is_not_a_failure() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["parse", "--menu", "menu.json", "a flying saucer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== ERRORS ==="))
        .stdout(predicate::str::contains("Could not find a match for \"flying saucer\"."));
}

#[test]
fn test_parse_json_output() {
    let fx = Fixture::new();

    let output = fx
        .cmd()
        .args(["--format", "json", "parse", "--menu", "menu.json", "3 burritos"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["items"][0]["name"], "burrito");
    assert_eq!(json["items"][0]["quantity"], 3);
    assert_eq!(json["total"], "6.87");
}

#[test]
fn test_parse_interactive_loop() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["parse", "--menu", "menu.json"])
        .write_stdin("two soft tacos\ny\na burrito\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, can I take your order?"))
        .stdout(predicate::str::contains("2x soft taco - $2.98"))
        .stdout(predicate::str::contains("1x burrito - $2.29"))
        .stdout(predicate::str::contains("Again?"));
}

#[test]
fn test_parse_interactive_stops_on_eof() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["parse", "--menu", "menu.json"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("YOUR ORDER").not());
}

#[test]
fn test_config_sets_output_format() {
    let fx = Fixture::new();
    fs::write(fx.path(".order-taker.toml"), "[output]\nformat = \"json\"\n").unwrap();

    fx.cmd()
        .args(["parse", "--menu", "menu.json", "a burrito"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"total\": \"2.29\""));
}

#[test]
fn test_invalid_config_exit_code() {
    let fx = Fixture::new();
    fs::write(fx.path("bad.toml"), "[matching]\nsimilarity_threshold = 2.0\n").unwrap();

    fx.cmd()
        .args(["--config", "bad.toml", "parse", "--menu", "menu.json", "a burrito"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("matching.similarity_threshold"));
}

#[test]
fn test_missing_menu_file() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["parse", "--menu", "nope.json", "a burrito"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_menu_exit_code() {
    let fx = Fixture::new();
    fs::write(fx.path("broken.json"), "{\"items\": 3}").unwrap();

    fx.cmd()
        .args(["parse", "--menu", "broken.json", "a burrito"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E4001"));
}

#[test]
fn test_menu_search() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["menu", "--menu", "menu.json", "--search", "crunchy tacos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crunchy taco"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_menu_search_json() {
    let fx = Fixture::new();

    let output = fx
        .cmd()
        .args(["-f", "json", "menu", "--menu", "menu.json", "--search", "taco crunchy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["match"]["name"], "crunchy taco");
    assert_eq!(json["match"]["rule"], "word_subset");
}

#[test]
fn test_menu_listing() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["menu", "--menu", "menu.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items"))
        .stdout(predicate::str::contains("$2.29"));
}

#[test]
fn test_stores_listing() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["stores", "--file", "stores.json", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Main St Irvine, CA"))
        .stdout(predicate::str::contains("9 Oak Ave").not());
}

#[test]
fn test_menu_without_priced_items() {
    let fx = Fixture::new();
    fs::write(
        fx.path("catalog.json"),
        r#"{"menuProductCategories": [{"products": [{"name": "Sauce Packet", "price": {"value": 0}}]}]}"#,
    )
    .unwrap();

    fx.cmd()
        .args(["menu", "--menu", "catalog.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no orderable items"));
}
