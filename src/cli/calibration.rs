// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Report where the sunset correction comes from.

use std::{borrow::Cow, fmt};

use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;

use super::common::InfoPrinter;
use crate::{
    calibration::{CalibrationOffset, OffsetSource, ReferenceObservation},
    constants::SHUL_LOCATION,
};

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct CalibrationArgs {}

impl CalibrationArgs {
    pub(super) fn run(self, reference: &ReferenceObservation, offset: &CalibrationOffset) {
        let mut printer = InfoPrinter::new("Sunset calibration".into());
        printer.push_block(report(reference, offset, &Local));
        printer.display();
    }
}

fn report<Tz>(
    reference: &ReferenceObservation,
    offset: &CalibrationOffset,
    tz: &Tz,
) -> Vec<Cow<'static, str>>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let local = |t: &DateTime<Utc>| t.with_timezone(tz).format("%Y-%m-%d %H:%M %Z").to_string();

    let mut block: Vec<Cow<'static, str>> = vec![
        format!(
            "Location: {}, {}",
            SHUL_LOCATION.latitude, SHUL_LOCATION.longitude
        )
        .into(),
        format!(
            "Reference: {} at {}, {} minutes after sunset",
            reference.date, reference.observed_local_time, reference.minutes_after_sunset
        )
        .into(),
    ];
    match offset.source() {
        OffsetSource::Disabled => block.push("Calibration is disabled; no offset".into()),
        OffsetSource::NoReferenceSunset { date } => {
            block.push(format!("No sunset computable on {date}; no offset").into())
        }
        OffsetSource::Computed {
            date: _,
            theoretical_sunset,
            implied_sunset,
        } => {
            block.push(format!("Theoretical sunset: {}", local(theoretical_sunset)).into());
            block.push(format!("Implied sunset:     {}", local(implied_sunset)).into());
        }
    }
    block.push(format!("Offset: {:+} s", offset.duration().num_seconds()).into());
    block
}
