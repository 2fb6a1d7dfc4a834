use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// A binary invocation isolated from any user config file.
fn cardpane(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cardpane").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("cardpane.toml"));
    cmd
}

const FEED: &str = concat!(
    r#"{"id":1,"title":"b","sourceCode":"print(1)","outputs":[{"type":"stdout","content":"1"}]}"#,
    "\n",
    r#"{"id":2,"title":"a","sourceCode":"plot()","outputs":[{"type":"image/png","content":""}]}"#,
    "\n",
);

#[test]
fn shell_lists_sample_card() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. sample card"))
        .stdout(predicate::str::contains("text/plain"));
}

#[test]
fn shell_ingest_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .arg("--no-seed")
        .write_stdin(concat!(
            r#"ingest '{"id":7,"title":"greeting","sourceCode":"print(\"hi\")","outputs":[{"type":"stdout","content":"hi"}]}'"#,
            "\nshow 7\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Card added (7): greeting"))
        .stdout(predicate::str::contains("[stdout]"))
        .stdout(predicate::str::contains("sample card").not());
}

#[test]
fn script_sorts_and_moves_feed_cards() {
    let temp_dir = tempfile::tempdir().unwrap();
    let feed = temp_dir.path().join("cards.jsonl");
    fs::write(&feed, FEED).unwrap();
    let script = temp_dir.path().join("script.txt");
    fs::write(
        &script,
        "# sort, then undo it by hand\nsort Alphabetical: A-Z\nmove up 1\n",
    )
    .unwrap();

    cardpane(temp_dir.path())
        .arg("--no-seed")
        .arg("--feed")
        .arg(&feed)
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by Alphabetical: A-Z"))
        .stdout(predicate::str::contains("order: 1 2"))
        .stdout(predicate::str::contains("sort: Custom"));
}

#[test]
fn script_facet_hides_rich_cards() {
    let temp_dir = tempfile::tempdir().unwrap();
    let feed = temp_dir.path().join("cards.jsonl");
    fs::write(&feed, FEED).unwrap();
    let script = temp_dir.path().join("script.txt");
    fs::write(&script, "facet error\nfacet rich\nfacets\n").unwrap();

    cardpane(temp_dir.path())
        .arg("--no-seed")
        .arg("--feed")
        .arg(&feed)
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Facet rich off"))
        .stdout(predicate::str::contains("1. b"))
        .stdout(predicate::str::contains("2. a").not())
        .stdout(predicate::str::contains("rich  off"));
}

#[test]
fn unknown_facet_fails_the_script() {
    let temp_dir = tempfile::tempdir().unwrap();
    let script = temp_dir.path().join("script.txt");
    fs::write(&script, "facet video\nlist\n").unwrap();

    cardpane(temp_dir.path())
        .arg("run")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown facet 'video'"))
        .stdout(predicate::str::contains("sample card"));
}

#[test]
fn invalid_regex_is_reported_and_shell_continues() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .write_stdin("search (oops\nlist\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid search pattern"))
        .stdout(predicate::str::contains("sample card"));
}

#[test]
fn missing_card_is_a_warning() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .write_stdin("delete 42\nselect 42\nselected\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No card with id 42"))
        .stdout(predicate::str::contains("selected: 42"));
}

#[test]
fn config_file_sets_default_sort() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("cardpane.toml"),
        "default_sort = \"Newest\"\nseed_sample_card = false\n",
    )
    .unwrap();

    cardpane(temp_dir.path())
        .write_stdin(concat!(
            r#"ingest '{"id":1,"title":"old","sourceCode":""}'"#,
            "\n",
            r#"ingest '{"id":2,"title":"new","sourceCode":""}'"#,
            "\nlist\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)2\. new.*1\. old").unwrap());
}

#[test]
fn bad_default_sort_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("cardpane.toml"),
        "default_sort = \"Random\"\n",
    )
    .unwrap();

    cardpane(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort mode 'Random'"));
}

#[test]
fn search_keeps_regex_escapes() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .arg("--no-seed")
        .write_stdin(concat!(
            r#"ingest '{"id":1,"title":"x1","sourceCode":""}'"#,
            "\n",
            r#"ingest '{"id":2,"title":"xd","sourceCode":""}'"#,
            "\n",
            r"search ^x\d$",
            "\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. x1"))
        .stdout(predicate::str::contains("2. xd").not())
        .stdout(predicate::str::contains("No cards match").not());
}

#[test]
fn search_pattern_may_start_with_hash() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .arg("--no-seed")
        .write_stdin(concat!(
            r##"ingest '{"id":1,"title":"c","sourceCode":"#include <stdio.h>"}'"##,
            "\n",
            r#"ingest '{"id":2,"title":"py","sourceCode":"print()"}'"#,
            "\n",
            "search #include\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. c"))
        .stdout(predicate::str::contains("2. py").not())
        .stdout(predicate::str::contains("Search cleared").not());
}

#[test]
fn env_disables_sample_card() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .env("CARDPANE_SEED", "false")
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample card").not())
        .stdout(predicate::str::contains("No cards to show."));
}

#[test]
fn env_sets_default_sort() {
    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .env("CARDPANE_DEFAULT_SORT", "Newest")
        .arg("--no-seed")
        .write_stdin(concat!(
            r#"ingest '{"id":1,"title":"old","sourceCode":""}'"#,
            "\n",
            r#"ingest '{"id":2,"title":"new","sourceCode":""}'"#,
            "\nlist\n"
        ))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)2\. new.*1\. old").unwrap());
}

#[test]
fn debug_logs_follow_verbose_and_env_filter() {
    let input = concat!(
        r#"ingest '{"id":1,"title":"one","sourceCode":""}'"#,
        "\n"
    );

    let temp_dir = tempfile::tempdir().unwrap();
    cardpane(temp_dir.path())
        .arg("--no-seed")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("card ingested").not());

    cardpane(temp_dir.path())
        .arg("--no-seed")
        .arg("--verbose")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("card ingested"));

    cardpane(temp_dir.path())
        .env("CARDPANE_LOG", "cardpane=debug")
        .arg("--no-seed")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("card ingested"));
}
