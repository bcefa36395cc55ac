// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Things shared between `zmanim` subcommands: argument files, parsing of
//! user-supplied dates and times, and pretty printing.

mod printers;

pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::ZmanimError;

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);
}

/// The format of dates given on the command line.
pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

/// The format of times given on the command line.
pub(super) const TIME_FORMAT: &str = "%H:%M";

/// If only a date is given, "now" is midday on that date.
const DEFAULT_HOUR: u32 = 12;

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(ZmanimError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(ZmanimError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(ZmanimError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

pub(super) fn parse_date(s: &str) -> Result<NaiveDate, ZmanimError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
        ZmanimError::InvalidArgs(format!("Couldn't parse '{s}' as a date (YYYY-MM-DD): {e}"))
    })
}

pub(super) fn parse_time(s: &str) -> Result<NaiveTime, ZmanimError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).map_err(|e| {
        ZmanimError::InvalidArgs(format!("Couldn't parse '{s}' as a time (HH:MM): {e}"))
    })
}

/// Work out what "now" is in `tz`. Without a date or time, it's the actual
/// current time. A date without a time means midday; a time without a date
/// means that time today.
pub(super) fn resolve_now<Tz: TimeZone>(
    tz: &Tz,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<DateTime<Tz>, ZmanimError> {
    if date.is_none() && time.is_none() {
        return Ok(Local::now().with_timezone(tz));
    }

    let date = match date {
        Some(d) => parse_date(d)?,
        None => Local::now().with_timezone(tz).date_naive(),
    };
    let time = match time {
        Some(t) => parse_time(t)?,
        None => NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0)
            .ok_or_else(|| ZmanimError::Generic("invalid default hour".to_string()))?,
    };
    let local = date.and_time(time);
    tz.from_local_datetime(&local).earliest().ok_or_else(|| {
        ZmanimError::InvalidArgs(format!("{local} doesn't exist in the local timezone"))
    })
}
