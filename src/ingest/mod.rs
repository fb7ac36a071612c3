// Ingest: turn keyword export files into brand corpora.
//
// One file per brand. The brand name is the file name without its extension,
// so "Acme Shoes.csv" becomes brand "Acme Shoes".

pub mod columns;
pub mod delimited;

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::info;

use crate::corpus::models::BrandCorpus;

static EXPORT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(xlsx|xls|csv|tsv)$").expect("valid regex"));

/// Brand name for a source file: file name, known extension stripped, trimmed.
pub fn brand_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    EXPORT_EXTENSION.replace(&file_name, "").trim().to_string()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Parse the text of one export into a corpus for `brand`.
pub fn parse_export(text: &str, delimiter: char, brand: &str) -> BrandCorpus {
    let rows = delimited::parse_delimited(text, delimiter);
    let keywords = columns::parse_sheet(&rows, brand);
    BrandCorpus::new(brand, keywords)
}

/// Read one keyword export from disk.
///
/// CSV and TSV are supported. Spreadsheet binaries are rejected with a hint
/// to save them as CSV first.
pub async fn read_brand_file(path: &Path) -> Result<BrandCorpus> {
    let delimiter = match extension_of(path).as_str() {
        "tsv" => '\t',
        "xlsx" | "xls" => anyhow::bail!(
            "{} is a spreadsheet file. Save it as CSV and try again.",
            path.display()
        ),
        _ => ',',
    };

    let brand = brand_name_from_path(path);
    if brand.is_empty() {
        anyhow::bail!("Cannot derive a brand name from {}", path.display());
    }

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8(bytes).with_context(|| {
        format!(
            "{} is not UTF-8 text; re-save it as UTF-8 CSV",
            path.display()
        )
    })?;

    let corpus = parse_export(&text, delimiter, &brand);
    info!(
        brand = corpus.brand_name,
        keywords = corpus.original_count,
        path = %path.display(),
        "Loaded keyword export"
    );
    Ok(corpus)
}

/// Read several exports concurrently. Output order matches `paths`.
pub async fn read_brand_files(paths: &[PathBuf]) -> Result<Vec<BrandCorpus>> {
    futures::future::try_join_all(paths.iter().map(|path| read_brand_file(path))).await
}
