// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests. These drive the `zmanim` binary and never touch the
//! network.

mod no_stderr;
mod show;
mod sun;

use std::{process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

fn zmanim() -> Command {
    let mut cmd = Command::cargo_bin("zmanim").unwrap();
    // The shul's timezone. Calibration absorbs the host's offset anyway, but
    // this keeps printed dates predictable.
    cmd.env("TZ", "America/New_York");
    cmd
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}
