// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fs::File, io::Write};

use indoc::writedoc;
use serde_json::Value;
use tempfile::TempDir;

use crate::{get_cmd_output, zmanim};

fn read_board(dir: &TempDir) -> Value {
    let contents = std::fs::read_to_string(dir.path().join("board.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_show_midweek() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("board.json");

    #[rustfmt::skip]
    let cmd = zmanim()
        .args([
            "show",
            "--no-calendar",
            "--date", "2025-12-10",
            "--time", "12:00",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "show failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Board"), "{stdout}");
    assert!(stdout.contains("Motzaei Shabbos Maariv: 5:17 PM"), "{stdout}");

    let board = read_board(&tmp_dir);
    assert_eq!(board["weekday_mincha_maariv"], "4:12 PM");
    assert_eq!(board["hero_weekday_mincha_maariv"], "4:12 PM");
    assert_eq!(board["erev_shabbos_mincha"], "4:12 PM");
    assert_eq!(board["shabbos_mincha"], "3:42 PM");
    assert_eq!(board["shabbos_maariv"], "5:17 PM");
    assert_eq!(board["reading"], "—");
    assert_eq!(board["current_year"], "2025");
}

#[test]
fn test_show_with_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let args_file = tmp_dir.path().join("show.toml");
    let output = tmp_dir.path().join("board.json");
    let mut f = File::create(&args_file).unwrap();
    writedoc!(
        f,
        r#"
            date = "2025-12-10"
            no_calendar = true
            output = "{}"
        "#,
        output.display()
    )
    .unwrap();
    drop(f);

    let cmd = zmanim()
        .args(["show", &format!("{}", args_file.display())])
        .ok();
    assert!(cmd.is_ok(), "show failed: {}", cmd.err().unwrap());

    let board = read_board(&tmp_dir);
    assert_eq!(board["shabbos_maariv"], "5:17 PM");
    assert_eq!(board["reading"], "—");
}

#[test]
fn test_show_bad_arg_file_extension() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let args_file = tmp_dir.path().join("show.yaml");
    File::create(&args_file).unwrap();

    let cmd = zmanim()
        .args(["show", &format!("{}", args_file.display())])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}

#[test]
fn test_show_bad_date() {
    let cmd = zmanim()
        .args(["show", "--no-calendar", "--date", "10/12/2025"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Couldn't parse '10/12/2025'"), "{stderr}");
}

#[test]
fn test_show_summer_week_is_labelled_by_schedule() {
    let cmd = zmanim()
        .args(["show", "--no-calendar", "--date", "2026-06-17"])
        .ok();
    assert!(cmd.is_ok(), "show failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("(week of 2026-06-14)"), "{stdout}");
    assert!(stdout.contains("Motzaei Shabbos Maariv (Shabbos 2026-06-20)"), "{stdout}");
    assert!(!stdout.contains("2026-06-19"), "{stdout}");
}
