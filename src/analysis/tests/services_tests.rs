//! Tests for service classification

use super::*;
use crate::analysis::services::{classify_segment, classify_services, tally_services};
use crate::constants::services;

#[test]
fn test_exchange_services_are_distinguished() {
    assert_eq!(
        classify_segment("exchange of crypto-assets for funds"),
        Some(services::EXCHANGE_FIAT)
    );
    assert_eq!(
        classify_segment("exchange of crypto-assets for other crypto-assets"),
        Some(services::EXCHANGE_CRYPTO)
    );
}

#[test]
fn test_classify_segment_known_services() {
    let cases = [
        (
            "providing custody and administration of crypto-assets on behalf of clients",
            services::CUSTODY,
        ),
        ("operation of a trading platform for crypto-assets", services::TRADING_PLATFORM),
        ("execution of orders for crypto-assets on behalf of clients", services::EXECUTION),
        ("placing of crypto-assets", services::PLACING),
        (
            "reception and transmission of orders for crypto-assets on behalf of clients",
            services::RECEPTION,
        ),
        ("providing advice on crypto-assets", services::ADVICE),
        ("providing portfolio management on crypto-assets", services::PORTFOLIO),
        (
            "providing transfer services for crypto-assets on behalf of clients",
            services::TRANSFER,
        ),
    ];

    for (segment, expected) in cases {
        assert_eq!(classify_segment(segment), Some(expected), "segment: {segment}");
    }
}

#[test]
fn test_classify_segment_is_case_insensitive() {
    assert_eq!(
        classify_segment("  Exchange Of Crypto-Assets For FUNDS "),
        Some(services::EXCHANGE_FIAT)
    );
}

#[test]
fn test_classify_segment_unmatched_and_empty() {
    assert_eq!(classify_segment("something unrelated"), None);
    assert_eq!(classify_segment("   "), None);
}

#[test]
fn test_classify_services_deduplicates_within_record() {
    let labels = classify_services("custody of crypto-assets|administration of crypto-assets");
    assert_eq!(labels, vec![services::CUSTODY]);
}

#[test]
fn test_classify_services_is_order_independent() {
    let forward = classify_services("placing of crypto-assets|providing advice on crypto-assets");
    let reverse = classify_services("providing advice on crypto-assets|placing of crypto-assets");
    assert_eq!(forward, reverse);
    assert_eq!(forward, vec![services::PLACING, services::ADVICE]);
}

#[test]
fn test_classify_services_bounded_by_segments() {
    let input = "execution of orders||placing of crypto-assets| |unknown service";
    let labels = classify_services(input);
    let segments = input.split('|').filter(|s| !s.trim().is_empty()).count();

    assert!(labels.len() <= segments);
    assert_eq!(classify_services(input), labels);
}

#[test]
fn test_tally_services_counts_providers_in_display_order() {
    let records = vec![
        RecordBuilder::new()
            .lei("1")
            .services("providing transfer services|custody and administration")
            .build(),
        RecordBuilder::new()
            .lei("2")
            .services("custody of crypto-assets|custody of crypto-assets")
            .build(),
        RecordBuilder::new()
            .lei("3")
            .services("operation of a trading platform")
            .build(),
        RecordBuilder::new().lei("4").build(),
    ];

    let tally = tally_services(&records);

    let counts: Vec<(&str, usize)> = tally.iter().map(|s| (s.name.as_str(), s.count)).collect();
    assert_eq!(
        counts,
        vec![
            (services::CUSTODY, 2),
            (services::TRANSFER, 1),
            (services::TRADING_PLATFORM, 1),
        ]
    );
}

#[test]
fn test_tally_services_empty_register() {
    assert!(tally_services(&[]).is_empty());
}
