//! Markdown table mapping sources
//!
//! Every body row of every table contributes one pair from its first two
//! cells. Cell text is sliced from the source rather than taken from parsed
//! inline events, so backslash escapes such as `\-` reach the engine intact.

use anyhow::{bail, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use rephrase_core::{MappingSet, RawPair};
use std::ops::Range;

/// Parse the body rows of all tables in a document
pub fn parse(content: &str) -> Result<MappingSet> {
    let parser = Parser::new_ext(content, Options::ENABLE_TABLES).into_offset_iter();

    let mut pairs = MappingSet::new();
    let mut tables = 0usize;
    let mut in_head = false;

    for (event, range) in parser {
        match event {
            Event::Start(Tag::Table(_)) => tables += 1,
            Event::Start(Tag::TableHead) => in_head = true,
            Event::End(TagEnd::TableHead) => in_head = false,
            Event::Start(Tag::TableRow) if !in_head => {
                let cells = split_row(row_source(content, &range));
                if cells.len() < 2 {
                    bail!(
                        "line {}: table row has {} cell(s), expected at least 2",
                        line_number(content, range.start),
                        cells.len()
                    );
                }
                pairs.push(RawPair::new(cells[0].as_str(), cells[1].as_str()));
            }
            _ => {}
        }
    }

    if tables == 0 {
        log::warn!("No tables found in Markdown mapping source");
    }

    Ok(pairs)
}

fn row_source<'a>(content: &'a str, range: &Range<usize>) -> &'a str {
    content.get(range.clone()).unwrap_or_default()
}

fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

/// Split a table row on unescaped pipes, unescaping `\|` inside cells
fn split_row(row: &str) -> Vec<String> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                cell.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }

    // A trailing pipe closes the last cell instead of opening a new one
    if !cell.trim().is_empty() || !row.ends_with('|') || row.ends_with("\\|") {
        cells.push(cell);
    }

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(content: &str) -> Vec<(String, String)> {
        parse(content)
            .unwrap()
            .into_iter()
            .map(|p| (p.from, p.to))
            .collect()
    }

    #[test]
    fn test_basic_table() {
        let doc = "\
# Spelling

| from | to |
|------|----|
| colour | color |
| -ise- | -ize- |
";
        assert_eq!(
            pairs(doc),
            vec![
                ("colour".to_string(), "color".to_string()),
                ("-ise-".to_string(), "-ize-".to_string()),
            ]
        );
    }

    #[test]
    fn test_escapes_survive() {
        let doc = "| from | to |\n|---|---|\n| \\-ing | \\-ed |\n| a \\| b | c |\n";
        assert_eq!(
            pairs(doc),
            vec![
                ("\\-ing".to_string(), "\\-ed".to_string()),
                ("a | b".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn test_multiple_tables_keep_order() {
        let doc = "\
| a | b |
|---|---|
| one | 1 |

Some text between tables.

| a | b |
|---|---|
| two | 2 |
";
        let froms: Vec<String> = pairs(doc).into_iter().map(|(f, _)| f).collect();
        assert_eq!(froms, vec!["one", "two"]);
    }

    #[test]
    fn test_rows_without_outer_pipes() {
        let doc = "from | to | note\n--- | --- | ---\ngrey | gray | US\n";
        assert_eq!(pairs(doc), vec![("grey".to_string(), "gray".to_string())]);
    }

    #[test]
    fn test_single_column_table_is_error() {
        let doc = "| from |\n|---|\n| lonely |\n";
        let err = parse(doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: table row has 1 cell(s), expected at least 2"
        );
    }

    #[test]
    fn test_no_tables() {
        assert!(parse("Just a paragraph.\n").unwrap().is_empty());
    }

    #[test]
    fn test_split_row() {
        assert_eq!(split_row("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_row("a | b"), vec!["a", "b"]);
        assert_eq!(split_row("| a |  |"), vec!["a", ""]);
        assert_eq!(split_row("| a | b \\|"), vec!["a", "b |"]);
    }
}
