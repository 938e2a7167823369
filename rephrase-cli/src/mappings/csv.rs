//! CSV mapping sources

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use rephrase_core::{MappingSet, RawPair};

/// Parse `from,to` rows
///
/// Extra columns are ignored. Empty values are passed through so that the
/// engine reports them alongside every other invalid pair.
pub fn parse(content: &str) -> Result<MappingSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut pairs = MappingSet::new();
    let mut first = true;

    for result in reader.records() {
        let record = result.context("Malformed CSV")?;
        let line = line_of(&record);

        if record.iter().all(str::is_empty) {
            continue;
        }
        if std::mem::take(&mut first) && is_header(&record) {
            continue;
        }
        if record.len() < 2 {
            bail!(
                "line {line}: row has {} column(s), expected at least 2",
                record.len()
            );
        }

        pairs.push(RawPair::new(&record[0], &record[1]));
    }

    Ok(pairs)
}

fn is_header(record: &StringRecord) -> bool {
    record.len() >= 2
        && record[0].eq_ignore_ascii_case("from")
        && record[1].eq_ignore_ascii_case("to")
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}
