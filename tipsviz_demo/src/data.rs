// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tips CSV loading.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tipsviz_charts::transforms::{Record, parse_records};

/// The columns the charts use. Other columns in the file are ignored.
///
/// Values stay strings here so that malformed numbers surface as
/// [`tipsviz_charts::transforms::RecordError`]s with the offending text.
#[derive(Debug, Deserialize)]
struct TipsRow {
    total_bill: String,
    tip: String,
    size: String,
    day: String,
}

/// How rows that fail to parse are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InvalidRowPolicy {
    /// Stop at the first bad row.
    Abort,
    /// Drop bad rows and log a warning for each.
    Skip,
}

pub(crate) fn load_records(path: &Path, policy: InvalidRowPolicy) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_records(file, policy).with_context(|| format!("reading {}", path.display()))
}

pub(crate) fn read_records(reader: impl Read, policy: InvalidRowPolicy) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in rdr.deserialize::<TipsRow>() {
        let row = row.context("malformed CSV row")?;
        rows.push([row.total_bill, row.tip, row.size, row.day]);
    }

    let parsed = parse_records(&rows);
    if let Some((row, err)) = parsed.first_error() {
        match policy {
            // Data rows are numbered from 1, after the header.
            InvalidRowPolicy::Abort => bail!("row {}: {err}", row + 1),
            InvalidRowPolicy::Skip => {
                for (row, err) in &parsed.rejected {
                    tracing::warn!(row = row + 1, %err, "skipping invalid row");
                }
            }
        }
    }
    tracing::info!(
        records = parsed.records.len(),
        rejected = parsed.rejected.len(),
        "loaded tips data"
    );
    Ok(parsed.records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "total_bill,tip,sex,smoker,day,time,size\n";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_the_columns_it_needs() {
        let file = write_csv("16.99,1.01,Female,No,Sun,Dinner,2\n10.34,1.66,Male,No,Sat,Dinner,3\n");
        let records = load_records(file.path(), InvalidRowPolicy::Abort).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total_bill, 16.99);
        assert_eq!(records[0].day, "Sun");
        assert_eq!(records[1].size, 3);
    }

    #[test]
    fn abort_policy_reports_the_bad_row() {
        let file = write_csv("16.99,1.01,Female,No,Sun,Dinner,2\nabc,1.66,Male,No,Sat,Dinner,3\n");
        let err = load_records(file.path(), InvalidRowPolicy::Abort).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("row 2"), "{message}");
        assert!(message.contains("abc"), "{message}");
    }

    #[test]
    fn skip_policy_drops_bad_rows() {
        let file = write_csv("16.99,NaN,Female,No,Sun,Dinner,2\n10.34,1.66,Male,No,Sat,Dinner,3\n");
        let records = load_records(file.path(), InvalidRowPolicy::Skip).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, "Sat");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("nope.csv"), InvalidRowPolicy::Skip).unwrap_err();
        assert!(format!("{err}").contains("nope.csv"), "{err}");
    }
}
