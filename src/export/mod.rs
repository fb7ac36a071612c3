// CSV export: delimited text for any keyword collection.
//
// Both entry lists (cleaned / unique keywords) and frequency lists (common /
// market keywords) share one layout:
//
//   Keyword,Search Volume,CPC,KD,Source/Frequency
//
// The last column holds the brand for entries and the cross-brand frequency
// for aggregates. Missing metrics are empty fields, never zero.

pub mod files;

use crate::analysis::market::KeywordFrequency;
use crate::corpus::models::KeywordEntry;

pub const HEADER: &str = "Keyword,Search Volume,CPC,KD,Source/Frequency";

/// A row shape the encoder understands.
pub trait ExportRow {
    fn keyword(&self) -> &str;
    fn search_volume(&self) -> Option<f64>;
    fn cpc(&self) -> Option<f64>;
    fn kd(&self) -> Option<f64>;
    /// Content of the final Source/Frequency column, already escaped.
    fn tag(&self) -> String;
}

impl ExportRow for KeywordEntry {
    fn keyword(&self) -> &str {
        &self.keyword
    }
    fn search_volume(&self) -> Option<f64> {
        self.search_volume
    }
    fn cpc(&self) -> Option<f64> {
        self.cpc
    }
    fn kd(&self) -> Option<f64> {
        self.kd
    }
    fn tag(&self) -> String {
        escape_if_needed(&self.source)
    }
}

impl ExportRow for KeywordFrequency {
    fn keyword(&self) -> &str {
        &self.keyword
    }
    fn search_volume(&self) -> Option<f64> {
        self.search_volume
    }
    fn cpc(&self) -> Option<f64> {
        self.cpc
    }
    fn kd(&self) -> Option<f64> {
        self.kd
    }
    fn tag(&self) -> String {
        self.frequency.to_string()
    }
}

/// Encode rows as CSV text: header line, then one line per row, `\n`-joined.
pub fn encode<T: ExportRow>(rows: &[T]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADER.to_string());

    for row in rows {
        lines.push(
            [
                quote(row.keyword()),
                format_metric(row.search_volume()),
                format_metric(row.cpc()),
                format_metric(row.kd()),
                row.tag(),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

/// Wrap a field in quotes, doubling any quote inside it.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quote only when the field would otherwise break the row.
fn escape_if_needed(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        quote(field)
    } else {
        field.to_string()
    }
}

fn format_metric(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
