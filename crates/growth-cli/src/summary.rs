//! Rendering of command reports to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use growth_references::Coverage;

use crate::types::{AgeReport, MeasurementReport, MidParentalReport, SdsReport};

pub fn print_age(report: &AgeReport) {
    let label = if report.adjusted {
        "Adjusted"
    } else {
        "Unadjusted"
    };
    println!("{label} decimal age: {:.4} y", report.decimal_age);
    println!("Calendar age: {}", report.calendar_age);
    if let Some(edd) = report.estimated_date_delivery {
        println!(
            "Estimated date of delivery (gestation {}): {edd}",
            report.gestation
        );
    }
}

pub fn print_sds(report: &SdsReport) {
    println!("Reference: {}", report.reference.display_name());
    println!(
        "{} ({}): {} {}",
        report.method,
        report.sex,
        report.observation_value,
        report.method.unit()
    );
    println!("SDS: {:.3}", report.sds);
    println!("Centile: {:.1} %", report.centile);
}

pub fn print_measurement(report: &MeasurementReport) {
    println!("Reference: {}", report.reference.display_name());
    println!("SDS: {:.3}", report.sds);
    println!("Centile: {:.1} %", report.centile);
    println!(
        "{}: {:.2} {}",
        report.method,
        report.value,
        report.method.unit()
    );
}

pub fn print_midparental(report: &MidParentalReport) {
    println!("Mid-parental height: {:.2} cm", report.height);
}

pub fn print_references(coverage: &[Coverage]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Reference", "Method", "Sex", "Age range (y)"]);
    for entry in coverage {
        table.add_row(vec![
            entry.reference.display_name().to_string(),
            entry.method.to_string(),
            entry.sex.to_string(),
            format!("{:.2}-{:.2}", entry.min_age, entry.max_age),
        ]);
    }
    println!("{table}");
}
