// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use chrono::FixedOffset;
use indoc::indoc;
use tempfile::TempDir;

use super::*;
use crate::{
    calibration::ReferenceObservation,
    constants::CALIBRATION_ENABLED,
    presentation::DisplaySlot,
    schedule::PrayerEvent,
    solar::compute_sunset,
};

fn est() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn shul_offset() -> CalibrationOffset {
    CalibrationOffset::compute(
        &ReferenceObservation::compiled().unwrap(),
        &SHUL_LOCATION,
        &est(),
        CALIBRATION_ENABLED,
        compute_sunset,
    )
    .unwrap()
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_merge_without_arg_file() {
    let args = ShowArgs {
        date: Some("2025-12-10".to_string()),
        ..Default::default()
    };
    assert_eq!(args.clone().merge().unwrap(), args);
}

#[test]
fn test_merge_toml_arg_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "show.toml",
        indoc! {r#"
            date = "2025-12-10"
            time = "09:30"
            no_calendar = true
            output = "board.json"
        "#},
    );

    let merged = ShowArgs {
        args_file: Some(path),
        ..Default::default()
    }
    .merge()
    .unwrap();
    assert_eq!(
        merged,
        ShowArgs {
            args_file: None,
            date: Some("2025-12-10".to_string()),
            time: Some("09:30".to_string()),
            no_calendar: true,
            output: Some(PathBuf::from("board.json")),
        }
    );
}

#[test]
fn test_merge_prefers_cli_args() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "show.json",
        indoc! {r#"
            {
              "date": "2025-12-10",
              "time": "09:30"
            }
        "#},
    );

    let merged = ShowArgs {
        args_file: Some(path),
        date: Some("2025-12-13".to_string()),
        no_calendar: true,
        ..Default::default()
    }
    .merge()
    .unwrap();
    assert_eq!(merged.date.as_deref(), Some("2025-12-13"));
    assert_eq!(merged.time.as_deref(), Some("09:30"));
    assert!(merged.no_calendar);
    assert!(merged.output.is_none());
}

#[test]
fn test_merge_bad_arg_files() {
    let dir = TempDir::new().unwrap();

    let path = write_file(&dir, "show.yaml", "date: 2025-12-10\n");
    let result = ShowArgs {
        args_file: Some(path),
        ..Default::default()
    }
    .merge();
    match result {
        Err(ZmanimError::ArgFile(msg)) => assert!(msg.contains("toml, json"), "{msg}"),
        other => panic!("expected an arg file error, got {other:?}"),
    }

    let path = write_file(&dir, "show.toml", "date = ");
    assert!(matches!(
        ShowArgs {
            args_file: Some(path),
            ..Default::default()
        }
        .merge(),
        Err(ZmanimError::ArgFile(_))
    ));

    assert!(matches!(
        ShowArgs {
            args_file: Some(dir.path().join("missing.json")),
            ..Default::default()
        }
        .merge(),
        Err(ZmanimError::Io(_))
    ));
}

#[test]
fn test_parse_without_calendar() {
    let params = ShowArgs {
        date: Some("2025-12-10".to_string()),
        time: Some("07:45".to_string()),
        no_calendar: true,
        ..Default::default()
    }
    .parse(&est())
    .unwrap();
    assert_eq!(params.now.naive_local().to_string(), "2025-12-10 07:45:00");
    assert!(params.calendar.is_none());
    assert!(params.output.is_none());

    let params = ShowArgs {
        date: Some("2025-12-10".to_string()),
        ..Default::default()
    }
    .parse(&est())
    .unwrap();
    assert_eq!(
        params.calendar.unwrap().url(),
        "https://www.hebcal.com/shabbat?cfg=json&geo=pos&latitude=41.19392515448243&longitude=-74.02504208449552&m=50"
    );
}

#[test]
fn test_parse_bad_date() {
    let result = ShowArgs {
        date: Some("12/10/2025".to_string()),
        no_calendar: true,
        ..Default::default()
    }
    .parse(&est());
    assert!(matches!(result, Err(ZmanimError::InvalidArgs(_))));
}

#[tokio::test]
async fn test_refresh_midweek() {
    let now = est().with_ymd_and_hms(2025, 12, 10, 12, 0, 0).unwrap();
    let Refresh { board, times, .. } = refresh(&now, &shul_offset(), None).await;

    assert_eq!(board.get(DisplaySlot::WeekdayMinchaMaariv), Some("4:12 PM"));
    assert_eq!(board.get(DisplaySlot::HeroWeekdayMinchaMaariv), Some("4:12 PM"));
    assert_eq!(board.get(DisplaySlot::ErevShabbosMincha), Some("4:12 PM"));
    assert_eq!(board.get(DisplaySlot::ShabbosMincha), Some("3:42 PM"));
    assert_eq!(board.get(DisplaySlot::ShabbosMaariv), Some("5:17 PM"));
    assert_eq!(board.get(DisplaySlot::Reading), Some("—"));
    assert_eq!(board.get(DisplaySlot::CurrentYear), Some("2025"));

    assert_eq!(times.len(), 4);
    let maariv = times.get(PrayerEvent::MotzaeiShabbosMaariv).unwrap();
    assert_eq!(
        maariv.with_timezone(&est()).naive_local().to_string(),
        "2025-12-13 17:17:00"
    );
}

#[tokio::test]
async fn test_refresh_saturday_night_shows_next_shabbos() {
    let offset = shul_offset();
    let afternoon = est().with_ymd_and_hms(2025, 12, 13, 15, 0, 0).unwrap();
    let evening = est().with_ymd_and_hms(2025, 12, 13, 18, 0, 0).unwrap();

    let this_week = refresh(&afternoon, &offset, None).await.times;
    let next_week = refresh(&evening, &offset, None).await.times;
    let this_maariv = this_week.get(PrayerEvent::MotzaeiShabbosMaariv).unwrap();
    let next_maariv = next_week.get(PrayerEvent::MotzaeiShabbosMaariv).unwrap();
    assert_eq!(
        this_maariv.with_timezone(&est()).date_naive().to_string(),
        "2025-12-13"
    );
    assert_eq!(
        next_maariv.with_timezone(&est()).date_naive().to_string(),
        "2025-12-20"
    );
}

#[tokio::test]
async fn test_summer_summary_uses_schedule_dates() {
    // Summer sunsets here are after 00:00 UTC, so Saturday's sunset instant
    // falls on Friday evening local time.
    let edt = FixedOffset::west_opt(4 * 3600).unwrap();
    let now = edt.with_ymd_and_hms(2026, 6, 17, 12, 0, 0).unwrap();
    let refresh = refresh(&now, &shul_offset(), None).await;
    assert_eq!(refresh.week_start, NaiveDate::from_ymd_opt(2026, 6, 14));
    assert_eq!(refresh.shabbos, NaiveDate::from_ymd_opt(2026, 6, 20));

    let lines = refresh.summary(&edt);
    assert_eq!(
        lines,
        vec![
            "Weekday Mincha/Maariv (week of 2026-06-14): 8:15 PM",
            "Erev Shabbos Mincha (Shabbos 2026-06-20): 8:17 PM",
            "Shabbos Mincha (Shabbos 2026-06-20): 7:47 PM",
            "Motzaei Shabbos Maariv (Shabbos 2026-06-20): 9:22 PM",
        ]
    );
    for line in &lines {
        assert!(!line.contains("2026-06-13"), "{line}");
        assert!(!line.contains("2026-06-19"), "{line}");
    }
}

#[test]
fn test_summary_without_times() {
    let refresh = Refresh {
        board: Board::new(),
        times: PrayerTimes::default(),
        week_start: None,
        shabbos: None,
    };
    assert_eq!(refresh.summary(&est()), vec!["None could be computed"]);
}

#[tokio::test]
async fn test_refresh_with_calendar() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/shabbat")
        .with_status(200)
        .with_body(r#"{"items": [{"category": "parashat", "title": "Parashat Vayeshev", "hebrew": "פרשת וישב"}]}"#)
        .create_async()
        .await;
    let client = CalendarClient::new(format!("{}/shabbat", server.url())).unwrap();

    let now = est().with_ymd_and_hms(2025, 12, 14, 10, 0, 0).unwrap();
    let Refresh { board, .. } = refresh(&now, &shul_offset(), Some(&client)).await;
    assert_eq!(board.get(DisplaySlot::Reading), Some("פרשת וישב"));
    assert!(board.get(DisplaySlot::WeekdayMinchaMaariv).is_some());
}

#[tokio::test]
async fn test_refresh_calendar_failure_only_affects_reading() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/shabbat")
        .with_status(500)
        .create_async()
        .await;
    let client = CalendarClient::new(format!("{}/shabbat", server.url())).unwrap();

    let now = est().with_ymd_and_hms(2025, 12, 10, 12, 0, 0).unwrap();
    let Refresh { board, times, .. } = refresh(&now, &shul_offset(), Some(&client)).await;
    assert_eq!(board.get(DisplaySlot::Reading), Some("—"));
    assert_eq!(board.get(DisplaySlot::ShabbosMaariv), Some("5:17 PM"));
    assert_eq!(times.len(), 4);
}

#[test]
fn test_run_writes_board_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("board.json");
    let params = ShowArgs {
        date: Some("2025-12-10".to_string()),
        no_calendar: true,
        output: Some(output.clone()),
        ..Default::default()
    }
    .parse(&est())
    .unwrap();
    params.run(&shul_offset()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(json["weekday_mincha_maariv"], "4:12 PM");
    assert_eq!(json["shabbos_mincha"], "3:42 PM");
    assert_eq!(json["hero_shabbos_maariv"], "5:17 PM");
    assert_eq!(json["reading"], "—");
    assert_eq!(json["current_year"], "2025");
}
