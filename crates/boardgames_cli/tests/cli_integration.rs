use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CREATORS_XML: &str = "\u{feff}<Creators>
  <Creator>
    <FirstName>Cone</FirstName>
    <LastName>Jay</LastName>
    <Boardgames>
      <Boardgame>
        <Name>Bohnanza Deluxe</Name>
        <Rating>6.5</Rating>
        <YearPublished>2019</YearPublished>
        <CategoryType>3</CategoryType>
        <Mechanics>Trading</Mechanics>
      </Boardgame>
      <Boardgame>
        <Name>Coup Reformation</Name>
        <Rating>7.1</Rating>
        <YearPublished>2021</YearPublished>
        <CategoryType>1</CategoryType>
        <Mechanics>Hidden Roles</Mechanics>
      </Boardgame>
    </Boardgames>
  </Creator>
</Creators>";

const SELLERS_JSON: &str = r#"[{"Name":"Board Bazaar","Address":"12 Main St","Country":"USA","Website":"www.boardbazaar.com","Boardgames":[1,1,2,999]}]"#;

fn boardgames(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("boardgames").unwrap();
    cmd.arg("--db")
        .arg(db)
        .arg("--log-level")
        .arg("error")
        .env_remove("BOARDGAMES_LOG_DIR");
    cmd
}

#[test]
fn import_then_export_through_the_cli() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("boardgames.sqlite3");
    let creators = dir.path().join("creators.xml");
    let sellers = dir.path().join("sellers.json");
    fs::write(&creators, CREATORS_XML).unwrap();
    fs::write(&sellers, SELLERS_JSON).unwrap();

    boardgames(&db)
        .args(["import", "creators"])
        .arg(&creators)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully imported creator – Cone Jay with 2 boardgames.",
        ));

    boardgames(&db)
        .args(["import", "sellers"])
        .arg(&sellers)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Invalid data!\nSuccessfully imported seller - Board Bazaar with 2 boardgames.\n",
        ));

    boardgames(&db)
        .args(["export", "creators"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<Creator BoardgamesCount=\"2\">"));

    let output = dir.path().join("sellers-export.json");
    boardgames(&db)
        .args(["export", "sellers", "--year", "2020", "--rating", "8"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    let exported = fs::read_to_string(&output).unwrap();
    assert!(exported.contains("\"Name\": \"Coup Reformation\""));
    assert!(!exported.contains("Bohnanza Deluxe"));
}

#[test]
fn reset_clears_imported_data() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("boardgames.sqlite3");
    let creators = dir.path().join("creators.xml");
    fs::write(&creators, CREATORS_XML).unwrap();

    boardgames(&db)
        .args(["import", "creators"])
        .arg(&creators)
        .assert()
        .success();
    boardgames(&db).arg("reset").assert().success();

    boardgames(&db)
        .args(["export", "creators"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<Creators/>"));
}

#[test]
fn missing_payload_file_fails() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("boardgames.sqlite3");

    boardgames(&db)
        .args(["import", "sellers"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn version_flag_reports_core_version() {
    let dir = tempdir().unwrap();
    boardgames(&dir.path().join("boardgames.sqlite3"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(boardgames_core::core_version()));
}
