// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{env, fs::File, path::PathBuf};

// Use the "built" crate to generate some useful build-time information,
// including the git hash and compiler version.
fn write_built() {
    built::write_built_file().expect("Failed to acquire build-time information");
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR env. variable not defined!"));

    // This block of code forces zmanim to recompile its binary everytime we do
    // a release build, so the build time reported is accurate.
    if env::var("DEBUG").map(|d| d == "false").unwrap_or(false) {
        let p = out_dir.join("rebuild_stamp");
        File::create(&p).expect("couldn't create rebuild stamp");
        println!("cargo:rerun-if-changed={}", p.display());
    }

    write_built();
}
