//! Tests for the cross-border matcher

use super::*;
use crate::analysis::cross_border::{
    analyze_cross_border, is_cross_border_into, parse_service_countries,
};

#[test]
fn test_parse_service_countries_accepts_both_delimiters() {
    assert_eq!(parse_service_countries("DE,NL"), vec!["DE", "NL"]);
    assert_eq!(parse_service_countries("DE|NL"), vec!["DE", "NL"]);
    assert_eq!(parse_service_countries(" DE | NL , FR "), vec!["DE", "NL", "FR"]);
}

#[test]
fn test_parse_service_countries_skips_empty_tokens() {
    assert_eq!(parse_service_countries(",,NL,"), vec!["NL"]);
    assert!(parse_service_countries("").is_empty());
    assert!(parse_service_countries(" | ").is_empty());
}

#[test]
fn test_target_membership_for_either_delimiter() {
    let comma = passporting_provider("1", "DE", "DE,NL");
    let pipe = passporting_provider("2", "DE", "DE|NL");

    assert!(is_cross_border_into(&comma, "NL"));
    assert!(is_cross_border_into(&pipe, "NL"));
}

#[test]
fn test_membership_is_token_exact() {
    let record = passporting_provider("1", "DE", "NLX,ANL");
    assert!(!is_cross_border_into(&record, "NL"));
}

#[test]
fn test_home_providers_are_not_cross_border() {
    let record = passporting_provider("1", "NL", "NL,DE");
    assert!(!is_cross_border_into(&record, "NL"));
}

#[test]
fn test_analyze_cross_border_partitions_register() {
    let records = vec![
        RecordBuilder::new()
            .lei("1")
            .home("NL")
            .commercial_name("Bitvavo|Bitvavo Pro")
            .legal_name("Bitvavo B.V.")
            .build(),
        passporting_provider("2", "DE", "DE,NL"),
        passporting_provider("3", "MT", "NL|FR"),
        passporting_provider("4", "DE", "AT"),
        passporting_provider("5", "DE", "NL"),
        RecordBuilder::new().lei("6").home("NL").legal_name("Plain B.V.").build(),
    ];

    let analysis = analyze_cross_border(&records, "NL");

    assert_eq!(analysis.target, "NL");
    assert_eq!(analysis.home_count, 2);
    assert_eq!(analysis.cross_border_count, 3);
    assert_eq!(analysis.total_active(), 5);

    let origins: Vec<(&str, usize)> = analysis
        .origins
        .iter()
        .map(|c| (c.code.as_str(), c.count))
        .collect();
    assert_eq!(origins, vec![("DE", 2), ("MT", 1)]);
    assert_eq!(analysis.origins[1].name, "Malta");

    assert_eq!(analysis.domestic.len(), 2);
    assert_eq!(analysis.domestic[0].name, "Bitvavo");
    assert_eq!(analysis.domestic[0].entity, "Bitvavo B.V.");
    assert_eq!(analysis.domestic[1].name, "Plain B.V.");
}

#[test]
fn test_analyze_cross_border_empty_register() {
    let analysis = analyze_cross_border(&[], "NL");
    assert_eq!(analysis.total_active(), 0);
    assert!(analysis.origins.is_empty());
    assert!(analysis.domestic.is_empty());
}
