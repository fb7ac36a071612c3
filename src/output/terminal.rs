// Colored terminal output for cleanup candidates and analysis results.
//
// main.rs delegates all display here. Nothing in this module affects what
// the pipeline computes.

use colored::Colorize;

use crate::analysis::market::MarketKeywordResult;
use crate::analysis::summary::AnalysisSummary;
use crate::analysis::unique::UniqueKeywordResult;
use crate::corpus::models::{CleanResult, CleanableItem};

const KEYWORD_WIDTH: usize = 40;

/// Display detected cleanup candidates, one block per brand.
pub fn display_cleanup_candidates(results: &[CleanResult]) {
    for result in results {
        println!(
            "\n{}",
            format!(
                "=== {} ({} duplicates, {} brand terms) ===",
                result.brand_name,
                result.duplicates.len(),
                result.brand_keywords.len()
            )
            .bold()
        );

        if result.duplicates.is_empty() && result.brand_keywords.is_empty() {
            println!("  {}", "Nothing to clean".dimmed());
            continue;
        }

        for item in &result.duplicates {
            print_candidate(item);
        }
        for item in &result.brand_keywords {
            print_candidate(item);
        }
    }
    println!();
}

fn print_candidate(item: &CleanableItem) {
    let mark = if item.selected {
        "[x]".green()
    } else {
        "[ ]".dimmed()
    };
    let reason = match item.count {
        Some(count) => format!("{} x{count}", item.reason),
        None => item.reason.to_string(),
    };
    println!(
        "  {} {:<width$} {}",
        mark,
        super::truncate_chars(&item.keyword, KEYWORD_WIDTH),
        reason.yellow(),
        width = KEYWORD_WIDTH + 3,
    );
}

/// Display the run's headline numbers.
pub fn display_summary(summary: &AnalysisSummary) {
    println!("\n{}", "=== Summary ===".bold());
    println!("  Brands:            {}", summary.total_brands);
    println!("  Original keywords: {}", summary.total_original_keywords);
    println!("  After cleanup:     {}", summary.total_cleaned_keywords);
    println!("  Common keywords:   {}", summary.total_common_keywords);
    println!(
        "  Market keywords:   {} (threshold: frequency >= {})",
        summary.total_market_keywords.to_string().bold(),
        summary.used_threshold
    );
}

/// Display the top `limit` market keywords with frequency and sources.
pub fn display_market_keywords(market: &MarketKeywordResult, limit: usize) {
    if market.market_keywords.is_empty() {
        println!("\nNo market keywords. Brands share no cleaned keywords.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Market Keywords (top {} of {}) ===",
            limit.min(market.market_keywords.len()),
            market.market_keywords.len()
        )
        .bold()
    );
    println!(
        "  {:>4}  {:<width$} {:>5}  {:>9}  {}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Freq".dimmed(),
        "Volume".dimmed(),
        "Sources".dimmed(),
        width = KEYWORD_WIDTH + 3,
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, kf) in market.market_keywords.iter().take(limit).enumerate() {
        let volume = kf
            .search_volume
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>4}. {:<width$} {:>5}  {:>9}  {}",
            i + 1,
            super::truncate_chars(&kf.keyword, KEYWORD_WIDTH),
            colorize_frequency(kf.frequency, market.threshold),
            volume,
            kf.sources.join(", ").dimmed(),
            width = KEYWORD_WIDTH + 2,
        );
    }
}

/// Display how many unique keywords each brand kept, with a short sample.
pub fn display_unique_keywords(unique: &[UniqueKeywordResult], sample: usize) {
    println!("\n{}", "=== Unique Keywords by Brand ===".bold());
    for result in unique {
        let preview: Vec<String> = result
            .unique_keywords
            .iter()
            .take(sample)
            .map(|entry| super::truncate_chars(&entry.keyword, KEYWORD_WIDTH))
            .collect();
        println!(
            "  {:<24} {:>6}  {}",
            result.brand_name,
            result.unique_keywords.len().to_string().cyan(),
            preview.join(", ").dimmed()
        );
    }
    println!();
}

/// Frequencies well above the threshold stand out.
fn colorize_frequency(frequency: usize, threshold: usize) -> colored::ColoredString {
    let text = frequency.to_string();
    if frequency >= threshold * 2 {
        text.red().bold()
    } else if frequency > threshold {
        text.bright_red()
    } else {
        text.yellow()
    }
}
