// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, zmanim};

#[test]
fn test_sun_prints_requested_days() {
    let cmd = zmanim()
        .args(["sun", "--date", "2025-12-06", "--days", "3"])
        .ok();
    assert!(cmd.is_ok(), "sun failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    for date in ["2025-12-06", "2025-12-07", "2025-12-08"] {
        assert!(stdout.contains(date), "{stdout}");
    }
    assert!(!stdout.contains("2025-12-09"), "{stdout}");
}

#[test]
fn test_sun_zero_days() {
    let cmd = zmanim().args(["sun", "--days", "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("at least 1"), "{stderr}");
}

#[test]
fn test_calibration_report() {
    let cmd = zmanim().arg("calibration").ok();
    assert!(cmd.is_ok(), "calibration failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("Reference: 2025-12-06 at 17:17, 50 minutes after sunset"),
        "{stdout}"
    );
    assert!(stdout.contains("Offset:"), "{stdout}");
}
