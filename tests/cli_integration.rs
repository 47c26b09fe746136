use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn getflix(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("getflix").unwrap();
    cmd.env_remove("GETFLIX_OMDB_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("GETFLIX_HOME", data_dir);
    cmd
}

#[test]
fn menu_session_persists_to_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    getflix(temp_dir.path())
        .write_stdin("2\nInception\n2010\n8.8\n4\nInception\ngreat visuals\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie 'Inception' added successfully."))
        .stdout(predicate::str::contains("Note added to 'Inception' successfully."))
        .stdout(predicate::str::ends_with("Bye!\n"));

    let saved = fs::read_to_string(temp_dir.path().join("movies.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["Inception"]["year"], 2010);
    assert_eq!(json["Inception"]["rating"], 8.8);
    assert_eq!(json["Inception"]["notes"][0], "great visuals");
}

#[test]
fn menu_survives_bad_input_and_eof() {
    let temp_dir = tempfile::tempdir().unwrap();

    getflix(temp_dir.path())
        .write_stdin("hello\n12\n3\nNothing\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Movie 'Nothing' not found."))
        .stdout(predicate::str::ends_with("Bye!\n"));

    assert!(!temp_dir.path().join("movies.json").exists());
}

#[test]
fn list_and_stats_subcommands_read_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("films.csv"),
        "title,year,rating,poster,imdb_id\nA,2001,9.0,N/A,N/A\nB,2002,9.0,N/A,N/A\nC,2003,5.0,N/A,N/A\n",
    )
    .unwrap();

    getflix(temp_dir.path())
        .args(["list", "--file", "films.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 movies in total"))
        .stdout(predicate::str::contains("  C  2003   5.0"));

    getflix(temp_dir.path())
        .args(["stats", "--file", "films.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average rating: 7.67"))
        .stdout(predicate::str::contains("Median rating: 9.00"))
        .stdout(predicate::str::contains("Best movies: A, B"))
        .stdout(predicate::str::contains("Worst movies: C"));
}

#[test]
fn search_subcommand_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("movies.json"),
        r#"{"The Matrix": {"year": 1999, "rating": 8.7}, "Up": {"year": 2009, "rating": 8.3}}"#,
    )
    .unwrap();

    getflix(temp_dir.path())
        .args(["search", "MATRIX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Matrix"))
        .stdout(predicate::str::contains("Up").not());
}

#[test]
fn corrupt_catalog_warns_and_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("movies.json"), "{ broken").unwrap();

    getflix(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies found."))
        .stderr(predicate::str::contains("WARN"));
}

#[test]
fn site_subcommand_writes_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("movies.json"),
        r#"{"Alien": {"year": 1979, "rating": 8.5, "imdb_id": "tt0078748"}}"#,
    )
    .unwrap();
    let output = temp_dir.path().join("site").join("index.html");

    getflix(temp_dir.path())
        .args(["site", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Website was generated successfully"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Alien"));
    assert!(html.contains("https://www.imdb.com/title/tt0078748/"));
    assert!(!html.contains("__TEMPLATE_MOVIE_GRID__"));
}
