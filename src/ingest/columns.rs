// Column detection for keyword-research exports.
//
// Tools disagree on header names ("Keyword", "Search Volume", "Avg. monthly
// searches", "关键词", ...). Each column is matched by pattern against the
// lower-cased header; the first header that matches wins. Without a keyword
// header the first column is assumed to hold keywords.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::corpus::models::KeywordEntry;

static KEYWORD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"keyword|关键词|query|term").expect("valid regex"));
static VOLUME_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"search.*volume|sv|搜索量|volume|流量").expect("valid regex"));
static CPC_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cpc|cost|点击成本").expect("valid regex"));
static KD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"kd|difficulty|难度").expect("valid regex"));

/// Column index for each field we understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMap {
    pub keyword: Option<usize>,
    pub search_volume: Option<usize>,
    pub cpc: Option<usize>,
    pub kd: Option<usize>,
}

fn first_match(headers: &[String], pattern: &Regex) -> Option<usize> {
    headers
        .iter()
        .position(|header| pattern.is_match(&header.to_lowercase()))
}

/// Map header cells to field columns.
pub fn detect_columns(headers: &[String]) -> ColumnMap {
    ColumnMap {
        keyword: first_match(headers, &KEYWORD_HEADER),
        search_volume: first_match(headers, &VOLUME_HEADER),
        cpc: first_match(headers, &CPC_HEADER),
        kd: first_match(headers, &KD_HEADER),
    }
}

/// Parse a numeric cell. Blank or non-numeric cells are missing, not zero.
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Turn parsed rows (header first) into keyword entries for `brand`.
///
/// Fewer than two rows means no data. Rows with a blank keyword are skipped.
pub fn parse_sheet(rows: &[Vec<String>], brand: &str) -> Vec<KeywordEntry> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    if data.is_empty() {
        return Vec::new();
    }

    let columns = detect_columns(header);
    let keyword_col = columns.keyword.unwrap_or(0);
    let cell = |row: &Vec<String>, col: Option<usize>| -> Option<f64> {
        col.and_then(|i| row.get(i)).and_then(|value| parse_number(value))
    };

    data.iter()
        .filter_map(|row| {
            let keyword = row.get(keyword_col).map(|k| k.trim()).unwrap_or("");
            if keyword.is_empty() {
                return None;
            }
            Some(KeywordEntry::new(keyword, brand).with_metrics(
                cell(row, columns.search_volume),
                cell(row, columns.cpc),
                cell(row, columns.kd),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_semrush_style_headers() {
        let map = detect_columns(&headers(&["Keyword", "Search Volume", "CPC", "Keyword Difficulty"]));
        assert_eq!(map.keyword, Some(0));
        assert_eq!(map.search_volume, Some(1));
        assert_eq!(map.cpc, Some(2));
        assert_eq!(map.kd, Some(3));
    }

    #[test]
    fn test_detect_chinese_headers() {
        let map = detect_columns(&headers(&["难度", "关键词", "搜索量"]));
        assert_eq!(map.keyword, Some(1));
        assert_eq!(map.search_volume, Some(2));
        assert_eq!(map.cpc, None);
        assert_eq!(map.kd, Some(0));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1200 "), Some(1200.0));
        assert_eq!(parse_number("0.75"), Some(0.75));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("1,000"), None);
    }

    #[test]
    fn test_parse_sheet_falls_back_to_first_column() {
        let rows = vec![headers(&["Phrase", "Volume"]), headers(&["shoes", "90"])];
        let entries = parse_sheet(&rows, "acme");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "shoes");
        assert_eq!(entries[0].search_volume, Some(90.0));
        assert_eq!(entries[0].source, "acme");
    }

    #[test]
    fn test_parse_sheet_header_only_is_empty() {
        assert!(parse_sheet(&[headers(&["Keyword"])], "acme").is_empty());
        assert!(parse_sheet(&[], "acme").is_empty());
    }
}
