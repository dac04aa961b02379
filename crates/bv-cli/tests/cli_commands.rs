//! Integration tests for the `bv` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use bv_vault::{GameRepository, JsonVault};
use predicates::prelude::*;
use tempfile::TempDir;

fn bv() -> Command {
    let mut cmd = Command::cargo_bin("bv").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("BV_LOG")
        .env_remove("BOWLVAULT_FILE");
    cmd
}

fn vault_path(dir: &TempDir) -> PathBuf {
    dir.path().join("games.json")
}

fn vault_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

/// Bowl and save a game through `bv play`, feeding `input` on stdin.
fn play_and_save(path: &Path, extra: &[&str], input: &str) {
    let mut args = vec!["--vault".to_string(), vault_arg(path), "play".to_string()];
    args.extend(extra.iter().map(|s| s.to_string()));
    bv().args(&args)
        .write_stdin(format!("{input}\nsave\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved game"));
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

#[test]
fn score_perfect_game() {
    bv().args(["score", "X", "X", "X", "X", "X", "X", "X", "X", "X", "X", "X", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score: 300"));
}

#[test]
fn score_all_spares() {
    let mut args = vec!["score"];
    for _ in 0..10 {
        args.extend(["5", "/"]);
    }
    args.push("5");
    bv().args(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score: 150"));
}

#[test]
fn score_accepts_one_quoted_sequence() {
    bv().args(["score", "x 7 / 9 - f 6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score so far: 54 (frame 5, ball 1)"));
}

#[test]
fn score_in_progress() {
    bv().args(["score", "10", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score so far: 24"));
}

#[test]
fn score_rejects_bad_token() {
    bv().args(["score", "7", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid delivery"));
}

#[test]
fn score_rejects_spare_on_first_ball() {
    bv().args(["score", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("first ball"));
}

#[test]
fn score_rejects_rolls_after_tenth() {
    let mut args = vec!["score"];
    args.extend(["0"; 21]);
    bv().args(&args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("after the tenth frame"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_saves_game_to_vault() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(
        &path,
        &["--ball", "Hammer", "--lane", "12", "--place", "Sunset Lanes"],
        "x x x x x x x x x x x x",
    );

    let vault = JsonVault::open(&path).unwrap();
    let games = vault.list().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].score, 300);
    assert_eq!(games[0].ball, "Hammer");
    assert_eq!(games[0].lane, "12");
    assert_eq!(games[0].place, "Sunset Lanes");
}

#[test]
fn play_reports_game_complete() {
    let dir = TempDir::new().unwrap();
    bv().args(["--vault", &vault_arg(&vault_path(&dir)), "play"])
        .write_stdin("9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 -\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Final score: 90")
                .and(predicate::str::contains("Unsaved game discarded")),
        );
}

#[test]
fn play_undo_rewinds_last_ball() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &[], "7\nundo\n3 4");

    let games = JsonVault::open(&path).unwrap().list().unwrap();
    assert_eq!(games[0].score, 7);
}

#[test]
fn play_league_mode_and_remembered_lane() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--league", "3v3", "--lane", "4"], "9 0");
    play_and_save(&path, &["--league", "3v3"], "8 1");

    let games = JsonVault::open(&path).unwrap().list().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[1].lane, "4");
    assert_eq!(games[1].mode.to_string(), "league 3v3");
}

#[test]
fn play_discards_whole_line_with_bad_token() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    bv().args(["--vault", &vault_arg(&path), "play"])
        .write_stdin("7 2 banana\nsave\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("invalid delivery")
                .and(predicate::str::contains("nothing from this line was recorded"))
                .and(predicate::str::contains("no rolls")),
        );
    assert!(!path.exists());
}

#[test]
fn play_line_past_tenth_frame_is_rejected_whole() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    bv().args(["--vault", &vault_arg(&path), "play"])
        .write_stdin("9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 5\n9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 -\nsave\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("one ball too many")
                .and(predicate::str::contains("Final score: 90"))
                .and(predicate::str::contains("Saved game")),
        );

    let games = JsonVault::open(&path).unwrap().list().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].score, 90);
    assert!(games[0].complete);
}

#[test]
fn play_practice_flag() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--practice"], "6 3");
    let games = JsonVault::open(&path).unwrap().list().unwrap();
    assert_eq!(games[0].mode.to_string(), "practice");

    bv().args(["--vault", &vault_arg(&path), "play", "--practice", "--league", "2v2"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn play_rejects_bad_league_size() {
    let dir = TempDir::new().unwrap();
    bv().args(["--vault", &vault_arg(&vault_path(&dir)), "play", "--league", "9v9"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid league size"));
}

#[test]
fn play_save_empty_game_warns() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    bv().args(["--vault", &vault_arg(&path), "play"])
        .write_stdin("save\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no rolls"));
    assert!(!path.exists());
}

// ---------------------------------------------------------------------------
// list / show / delete / stats
// ---------------------------------------------------------------------------

#[test]
fn list_empty_vault() {
    let dir = TempDir::new().unwrap();
    bv().args(["--vault", &vault_arg(&vault_path(&dir)), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No games saved."));
}

#[test]
fn list_shows_saved_games() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--ball", "Storm"], "x x x x x x x x x x x x");

    bv().args(["--vault", &vault_arg(&path), "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("300")
                .and(predicate::str::contains("Storm"))
                .and(predicate::str::contains("1 game")),
        );
}

#[test]
fn list_newest_first_and_filtered_by_mode() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--ball", "Oldie"], "3 4");
    play_and_save(&path, &["--ball", "Newbie", "--league", "2v2"], "8 1");

    let output = bv()
        .args(["--vault", &vault_arg(&path), "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let newer = stdout.find("Newbie").unwrap();
    let older = stdout.find("Oldie").unwrap();
    assert!(newer < older);

    bv().args(["--vault", &vault_arg(&path), "list", "--mode", "practice"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Oldie")
                .and(predicate::str::contains("Newbie").not())
                .and(predicate::str::contains("1 game")),
        );

    bv().args(["--vault", &vault_arg(&path), "list", "-m", "3v3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No 3v3 games saved."));

    bv().args(["--vault", &vault_arg(&path), "list", "--mode", "bumpers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mode filter"));
}

#[test]
fn list_marks_unfinished_games() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &[], "x 7 / 9 -");

    bv().args(["--vault", &vault_arg(&path), "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("48*")
                .and(predicate::str::contains("saved before the tenth frame")),
        );
}

#[test]
fn vault_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &[], "5 4");

    bv().arg("list")
        .env("BOWLVAULT_FILE", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 game"));
}

#[test]
fn show_by_id_prefix() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--player", "Robin"], "x 7 / 9 -");

    let id = JsonVault::open(&path).unwrap().list().unwrap()[0].id;
    let prefix = id.simple().to_string()[..8].to_string();

    bv().args(["--vault", &vault_arg(&path), "show", &prefix])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(id.to_string())
                .and(predicate::str::contains("Robin"))
                .and(predicate::str::contains("Score: 48"))
                .and(predicate::str::contains("Saved before the tenth frame")),
        );
}

#[test]
fn delete_removes_game() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &[], "3 4");
    let id = JsonVault::open(&path).unwrap().list().unwrap()[0].id;

    bv().args(["--vault", &vault_arg(&path), "delete", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted game"));

    assert!(JsonVault::open(&path).unwrap().list().unwrap().is_empty());
}

#[test]
fn edit_updates_details() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--lane", "6"], "3 4");
    let id = JsonVault::open(&path).unwrap().list().unwrap()[0].id;
    let prefix = id.simple().to_string()[..8].to_string();

    bv().args([
        "--vault",
        &vault_arg(&path),
        "edit",
        &prefix,
        "--ball",
        "Storm",
        "--place",
        "Sunset Lanes",
        "--score",
        "120",
        "--date",
        "2024-01-15",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Updated game").and(predicate::str::contains("2024-01-15")));

    let game = JsonVault::open(&path).unwrap().get(id).unwrap();
    assert_eq!(game.ball, "Storm");
    assert_eq!(game.lane, "6");
    assert_eq!(game.place, "Sunset Lanes");
    assert_eq!(game.score, 120);
    assert_eq!(game.date.format("%Y-%m-%d").to_string(), "2024-01-15");
}

#[test]
fn edit_rejects_bad_input() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &[], "3 4");
    let id = JsonVault::open(&path).unwrap().list().unwrap()[0].id.to_string();

    bv().args(["--vault", &vault_arg(&path), "edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));

    bv().args(["--vault", &vault_arg(&path), "edit", &id, "--score", "301"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid score"));

    bv().args(["--vault", &vault_arg(&path), "edit", &id, "--date", "15/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));

    assert_eq!(JsonVault::open(&path).unwrap().list().unwrap()[0].score, 7);
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &[], "3 4");
    play_and_save(&path, &[], "5 2");

    bv().args(["--vault", &vault_arg(&path), "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rerun with --yes"));
    assert_eq!(JsonVault::open(&path).unwrap().list().unwrap().len(), 2);

    bv().args(["--vault", &vault_arg(&path), "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 games."));
    assert!(JsonVault::open(&path).unwrap().list().unwrap().is_empty());
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    bv().args(["--vault", &vault_arg(&vault_path(&dir)), "delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no game found"));
}

#[test]
fn stats_summarize_vault() {
    let dir = TempDir::new().unwrap();
    let path = vault_path(&dir);
    play_and_save(&path, &["--ball", "Hammer"], "x x x x x x x x x x x x");
    play_and_save(&path, &["--ball", "Storm", "--league", "2v2"], "9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 - 9 -");

    bv().args(["--vault", &vault_arg(&path), "stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Games played:  2")
                .and(predicate::str::contains("High game:     300"))
                .and(predicate::str::contains("Low game:      90"))
                .and(predicate::str::contains("Favorite ball: Hammer"))
                .and(predicate::str::contains("90.0"))
                .and(predicate::str::contains("300.0")),
        );
}

#[test]
fn stats_on_empty_vault() {
    let dir = TempDir::new().unwrap();
    bv().args(["--vault", &vault_arg(&vault_path(&dir)), "stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Games played:  0")
                .and(predicate::str::contains("Favorite ball: None")),
        );
}
