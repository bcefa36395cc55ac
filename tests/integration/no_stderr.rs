// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use crate::{get_cmd_output, zmanim};

#[test]
fn test_show_no_stderr() {
    let cmd = zmanim()
        .args(["show", "--no-calendar", "--date", "2025-12-10"])
        .ok();
    assert!(cmd.is_ok(), "show failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_sun_no_stderr() {
    let cmd = zmanim().args(["sun", "--date", "2025-12-06"]).ok();
    assert!(cmd.is_ok(), "sun failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
