// Write a report's keyword collections to a directory of CSV files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::info;

use super::{encode, ExportRow};
use crate::pipeline::run::AnalysisReport;

/// Directory name used when none is configured, e.g. `seoking-export-20260301-142500`.
pub fn default_output_dir(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("seoking-export-{}", now.format("%Y%m%d-%H%M%S")))
}

/// Make a brand name safe to use inside a file name.
///
/// Path separators, reserved characters and control characters become `_`;
/// surrounding whitespace and dots are trimmed.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "brand".to_string()
    } else {
        trimmed.to_string()
    }
}

fn write_csv<T: ExportRow>(dir: &Path, file_name: &str, rows: &[T]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, encode(rows))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Write market, common, cleaned and unique keyword files into `dir`.
///
/// Creates `dir` if needed. Returns the written paths in write order.
pub fn write_report(dir: &Path, report: &AnalysisReport) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut written = vec![
        write_csv(dir, "market_keywords.csv", &report.market.market_keywords)?,
        write_csv(dir, "common_keywords.csv", &report.market.common_keywords)?,
    ];

    for result in &report.clean_results {
        let name = format!("cleaned_{}.csv", sanitize_file_name(&result.brand_name));
        written.push(write_csv(dir, &name, &result.cleaned_keywords)?);
    }

    for result in &report.unique {
        let name = format!("unique_{}.csv", sanitize_file_name(&result.brand_name));
        written.push(write_csv(dir, &name, &result.unique_keywords)?);
    }

    info!(dir = %dir.display(), files = written.len(), "Exported keyword CSVs");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Acme"), "Acme");
        assert_eq!(sanitize_file_name("acme/shop:eu"), "acme_shop_eu");
        assert_eq!(sanitize_file_name("  .hidden. "), "hidden");
        assert_eq!(sanitize_file_name("..."), "brand");
    }

    #[test]
    fn test_default_output_dir_is_timestamped() {
        let now = Local
            .with_ymd_and_hms(2026, 3, 1, 14, 25, 0)
            .single()
            .unwrap();
        assert_eq!(
            default_output_dir(now),
            PathBuf::from("seoking-export-20260301-142500")
        );
    }
}
