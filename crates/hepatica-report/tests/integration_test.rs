//! Integration tests for the assessment and reporting flow.

use hepatica_report::{
    ExportFormat, Exporter, FeatureInfluence, RiskAssessment, RiskBand, band_banner,
    influence_chart_ascii, influence_chart_svg,
};

#[test]
fn test_full_assessment_workflow() {
    let influences = FeatureInfluence::from_pairs(vec![
        ("bmi".to_string(), 0.32),
        ("alcohol".to_string(), 0.24),
        ("diabetes".to_string(), 0.20),
        ("cholesterol".to_string(), 0.12),
        ("exercise".to_string(), 0.08),
        ("fatigue".to_string(), 0.04),
    ]);

    let assessment = RiskAssessment::from_probability(0.67)
        .with_bmi(31.2)
        .with_influences(influences);

    assert_eq!(assessment.risk_percent, 67);
    assert_eq!(assessment.band, RiskBand::High);
    assert_eq!(band_banner(assessment.band), "HIGH RISK");

    // The influence weights flow into both chart renderings.
    let ascii = influence_chart_ascii(&assessment.influences, 32);
    assert!(ascii.contains("bmi"));
    assert!(ascii.contains("fatigue"));

    let svg = influence_chart_svg(&assessment.influences, 480, 240);
    assert_eq!(svg.matches("<rect").count(), 6);

    // The ASCII report embeds the chart, the guidance, and the disclaimer.
    let table = assessment.to_ascii_table();
    assert!(table.contains("Calculated BMI:           31.20"));
    assert!(table.contains("High"));
    assert!(table.contains("Preventive Guidance:"));
    assert!(table.contains("Not intended for clinical use."));

    // Exports agree on the headline numbers.
    let json = assessment.export_to_string(ExportFormat::Json).unwrap();
    assert!(json.contains("\"risk_percent\":67"));

    let csv = assessment.export_to_string(ExportFormat::Csv).unwrap();
    assert!(csv.contains("band,High"));
    assert!(csv.contains("influence_bmi,0.32"));
}

#[test]
fn test_low_risk_assessment_without_bmi() {
    let assessment = RiskAssessment::from_probability(0.12);

    assert_eq!(assessment.band, RiskBand::Low);
    assert!(assessment.bmi.is_none());

    let table = assessment.to_ascii_table();
    assert!(!table.contains("Calculated BMI"));
    assert!(!table.contains("Normalized Feature Influence"));

    let csv = assessment.export_to_string(ExportFormat::Csv).unwrap();
    assert!(csv.contains("band,Low"));
    assert!(!csv.contains("bmi,"));
}
