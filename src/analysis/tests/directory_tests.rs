//! Tests for the provider directory

use super::*;
use crate::analysis::directory::build_directory;

#[test]
fn test_directory_sorted_by_country_then_name() {
    let records = vec![
        RecordBuilder::new().lei("1").home("NL").legal_name("zeta B.V.").build(),
        RecordBuilder::new().lei("2").home("DE").legal_name("Beta GmbH").build(),
        RecordBuilder::new().lei("3").home("NL").legal_name("Alpha B.V.").build(),
        RecordBuilder::new().lei("4").home("DE").legal_name("alpha AG").build(),
    ];

    let directory = build_directory(&records);

    let order: Vec<(&str, &str)> = directory
        .iter()
        .map(|e| (e.home.as_str(), e.name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("DE", "alpha AG"),
            ("DE", "Beta GmbH"),
            ("NL", "Alpha B.V."),
            ("NL", "zeta B.V."),
        ]
    );

    for pair in directory.windows(2) {
        let a = (pair[0].home.clone(), pair[0].name.to_lowercase());
        let b = (pair[1].home.clone(), pair[1].name.to_lowercase());
        assert!(a <= b);
    }
}

#[test]
fn test_directory_resolves_authority() {
    let records = vec![
        RecordBuilder::new()
            .lei("1")
            .home("DE")
            .commercial_name("Trade Republic|TR")
            .legal_name("Trade Republic Bank GmbH")
            .build(),
        RecordBuilder::new().lei("2").home("XX").legal_name("Unknown Ltd").build(),
    ];

    let directory = build_directory(&records);

    assert_eq!(directory[0].name, "Trade Republic");
    assert_eq!(directory[0].entity, "Trade Republic Bank GmbH");
    assert_eq!(directory[0].authority, "BaFin");
    assert_eq!(directory[1].authority, "XX");
}

#[test]
fn test_directory_includes_records_without_home_country() {
    let records = vec![
        RecordBuilder::new().lei("1").home("AT").legal_name("B").build(),
        RecordBuilder::new().lei("2").legal_name("A").build(),
    ];

    let directory = build_directory(&records);

    assert_eq!(directory.len(), 2);
    assert_eq!(directory[0].home, "");
    assert_eq!(directory[0].authority, "");
}
