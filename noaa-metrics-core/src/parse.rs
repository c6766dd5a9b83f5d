//! Access log line parsing
//!
//! The download log is written by nginx with a fixed, whitespace-delimited
//! layout. Only the fields needed for reporting are extracted:
//!
//! ```text
//! [17/Feb/2023:08:49:35] GET https 128.138.135.20 41213 /NOAA/G02135/north.csv 200
//!  ^ token 0 (date)                ^ token 3      ^ 4   ^ token 5             ^ 6
//! ```
//!
//! The timestamp is a single token with no zone suffix. A line carrying a
//! separate zone token shifts every field by one and is rejected, since the
//! address then lands in the byte-count position.

use crate::error::MetricsError;
use crate::record::RawLogRecord;
use chrono::NaiveDate;
use thiserror::Error;

const MIN_FIELDS: usize = 7;
const DATE_FORMAT: &str = "%d/%b/%Y";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least 7 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("timestamp '{token}' is not of the form [dd/Mon/yyyy:hh:mm:ss")]
    BadTimestamp { token: String },

    #[error("byte count '{token}' is not a non-negative integer")]
    BadByteCount { token: String },
}

pub fn parse_line(line: &str) -> Result<RawLogRecord, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(LineError::TooFewFields {
            found: fields.len(),
        });
    }

    let date = parse_date(fields[0])?;
    let download_bytes = fields[4]
        .parse::<u64>()
        .map_err(|_| LineError::BadByteCount {
            token: fields[4].to_string(),
        })?;

    Ok(RawLogRecord {
        date,
        ip_address: fields[3].to_string(),
        download_bytes,
        file_path: fields[5].to_string(),
        status: fields[6].to_string(),
    })
}

/// Parse every non-blank line, failing on the first malformed one.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<RawLogRecord>, MetricsError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_line(line).map_err(|source| MetricsError::MalformedRecord {
                line_number: i + 1,
                line: line.to_string(),
                source,
            })
        })
        .collect()
}

/// `[17/Feb/2023:08:49:35` -> 2023-02-17
fn parse_date(token: &str) -> Result<NaiveDate, LineError> {
    let bad = || LineError::BadTimestamp {
        token: token.to_string(),
    };

    let stamp = token.strip_prefix('[').ok_or_else(bad)?;
    let stamp = stamp.trim_end_matches(']');
    let day = stamp.split(':').next().ok_or_else(bad)?;

    NaiveDate::parse_from_str(day, DATE_FORMAT).map_err(|_| bad())
}
