// Composition tests: the pipeline stages chained together.
//
// These exercise the data flow:
//   ingest text -> detect -> review -> execute -> analyze -> extract
// without touching the filesystem.

use std::collections::HashSet;

use seoking::analysis::market::AnalysisConfig;
use seoking::cleanup::detect::detect_all;
use seoking::cleanup::execute::execute_all;
use seoking::corpus::models::{BrandCorpus, KeywordEntry};
use seoking::ingest::parse_export;
use seoking::pipeline::review::Review;
use seoking::pipeline::run::{ensure_unique_brands, run, AnalysisReport};

fn corpus(brand: &str, keywords: &[&str]) -> BrandCorpus {
    BrandCorpus::new(
        brand,
        keywords
            .iter()
            .map(|k| KeywordEntry::new(*k, brand))
            .collect(),
    )
}

fn sample_corpora() -> Vec<BrandCorpus> {
    vec![
        corpus(
            "Acme",
            &[
                "acme shoes",
                "running shoes",
                "Trail Shoes",
                "trail shoes",
                "hiking boots",
                "acme outlet",
                "waterproof socks",
            ],
        ),
        corpus(
            "Zenith Gear",
            &[
                "Running Shoes",
                "trail shoes",
                "zenith jacket",
                "gear bag",
                "rain jacket",
            ],
        ),
        corpus(
            "Nova",
            &["running shoes", "rain jacket", "casanova", "camp stove", "camp stove"],
        ),
    ]
}

fn analyze(corpora: &[BrandCorpus], review: &Review) -> AnalysisReport {
    run(corpora, review, &AnalysisConfig::default()).unwrap()
}

// ============================================================
// Full run
// ============================================================

#[test]
fn full_run_classifies_market_common_and_unique() {
    let report = analyze(&sample_corpora(), &Review::default());

    let common: Vec<(&str, usize)> = report
        .market
        .common_keywords
        .iter()
        .map(|k| (k.keyword.as_str(), k.frequency))
        .collect();
    assert_eq!(
        common,
        vec![("running shoes", 3), ("Trail Shoes", 2), ("rain jacket", 2)]
    );
    assert_eq!(report.market.threshold, 2);
    assert_eq!(report.market.market_keywords, report.market.common_keywords);
    assert_eq!(
        report.market.common_keywords[0].sources,
        vec!["Acme", "Zenith Gear", "Nova"]
    );

    let unique: Vec<(&str, Vec<&str>)> = report
        .unique
        .iter()
        .map(|u| {
            (
                u.brand_name.as_str(),
                u.unique_keywords.iter().map(|e| e.keyword.as_str()).collect(),
            )
        })
        .collect();
    assert_eq!(
        unique,
        vec![
            ("Acme", vec!["hiking boots", "waterproof socks"]),
            ("Zenith Gear", vec![]),
            ("Nova", vec!["camp stove"]),
        ]
    );

    assert_eq!(report.summary.total_brands, 3);
    assert_eq!(report.summary.total_original_keywords, 17);
    assert_eq!(report.summary.total_cleaned_keywords, 10);
}

#[test]
fn review_keeps_selected_keywords() {
    let review = Review {
        keep_keywords: vec!["ZENITH JACKET".to_string()],
        keep_brand_terms: false,
    };
    let report = analyze(&sample_corpora(), &review);
    let zenith = &report.unique[1];
    let kept: Vec<&str> = zenith
        .unique_keywords
        .iter()
        .map(|e| e.keyword.as_str())
        .collect();
    assert_eq!(kept, vec!["zenith jacket"]);
}

#[test]
fn review_keep_brand_terms_restores_vanity_keywords() {
    let review = Review {
        keep_keywords: vec![],
        keep_brand_terms: true,
    };
    let report = analyze(&sample_corpora(), &review);
    let acme: Vec<&str> = report.clean_results[0]
        .cleaned_keywords
        .iter()
        .map(|e| e.keyword.as_str())
        .collect();
    assert_eq!(
        acme,
        vec![
            "acme shoes",
            "running shoes",
            "Trail Shoes",
            "hiking boots",
            "acme outlet",
            "waterproof socks",
        ]
    );
    assert!(report.clean_results[0]
        .brand_keywords
        .iter()
        .all(|item| !item.selected));
}

#[test]
fn full_run_is_deterministic() {
    let corpora = sample_corpora();
    let a = analyze(&corpora, &Review::default());
    let b = analyze(&corpora, &Review::default());
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn report_serializes_reason_tags() {
    let report = analyze(&sample_corpora(), &Review::default());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json["clean_results"][0]["brand_keywords"][0]["reason"],
        "brand"
    );
    assert_eq!(
        json["clean_results"][0]["duplicates"][0]["reason"],
        "duplicate"
    );
}

// ============================================================
// Cross-stage invariants
// ============================================================

#[test]
fn cleaned_lists_never_hold_selected_vanity_or_repeats() {
    let corpora = sample_corpora();
    let executed = execute_all(&corpora, detect_all(&corpora)).unwrap();

    for result in &executed {
        let vanity: HashSet<String> = result
            .brand_keywords
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.keyword.to_lowercase())
            .collect();
        let mut seen = HashSet::new();
        for entry in &result.cleaned_keywords {
            let lower = entry.normalized();
            assert!(!vanity.contains(&lower), "{lower} should have been removed");
            assert!(seen.insert(lower.clone()), "{lower} emitted twice");
        }
    }
}

#[test]
fn unique_and_common_never_intersect() {
    let report = analyze(&sample_corpora(), &Review::default());
    let common: HashSet<String> = report
        .market
        .common_keywords
        .iter()
        .map(|k| k.keyword.to_lowercase())
        .collect();
    for result in &report.unique {
        for entry in &result.unique_keywords {
            assert!(!common.contains(&entry.normalized()));
        }
    }
}

#[test]
fn ingest_to_report_chain() {
    let acme = parse_export(
        "Keyword,Search Volume\nacme boots,50\nwinter boots,\nWinter Boots,900\n",
        ',',
        "Acme",
    );
    let polar = parse_export("Keyword,Search Volume\nwinter boots,1000\nsnow pants,40\n", ',', "Polar");
    let report = analyze(&[acme, polar], &Review::default());

    let top = &report.market.market_keywords[0];
    assert_eq!(top.keyword, "winter boots");
    assert_eq!(top.frequency, 2);
    // Acme's first "winter boots" row had no volume; its dropped duplicate is
    // not aggregated, so the value comes from Polar
    assert_eq!(top.search_volume, Some(1000.0));
}

// ============================================================
// Preconditions and empty input
// ============================================================

#[test]
fn duplicate_brand_names_are_rejected() {
    let corpora = vec![corpus("Acme", &["a"]), corpus("Acme", &["b"])];
    assert!(ensure_unique_brands(&corpora).is_err());
    assert!(run(&corpora, &Review::default(), &AnalysisConfig::default()).is_err());
}

#[test]
fn empty_run_produces_empty_report() {
    let report = analyze(&[], &Review::default());
    assert!(report.clean_results.is_empty());
    assert!(report.market.common_keywords.is_empty());
    assert!(report.unique.is_empty());
    assert_eq!(report.summary.total_brands, 0);
}

#[test]
fn brands_with_empty_corpora_flow_through() {
    let report = analyze(&[corpus("Acme", &[]), corpus("Zenith", &[])], &Review::default());
    assert_eq!(report.clean_results.len(), 2);
    assert!(report.unique.iter().all(|u| u.unique_keywords.is_empty()));
}
