//! Terminal output formatting.

use colored::Colorize;

use crisislens_core::analysis::model::CrisisAssessment;

/// Print a colored summary of a crisis assessment.
pub fn print_assessment(assessment: &CrisisAssessment) {
    println!();
    println!(
        "  {} {}",
        "Crisis type".bold(),
        assessment.crisis_type.as_deref().unwrap_or("(not reported)")
    );
    println!(
        "  {}    {}",
        "Severity".bold(),
        severity_colored(assessment.severity_level.as_deref())
    );

    print_section("Key observations", &assessment.key_observations);
    print_section("Identified risks", &assessment.identified_risks);
    print_section("Recommended actions", &assessment.recommended_actions);
    println!();
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("  {}", title.bold());
    for item in items {
        println!("    {} {}", "-".dimmed(), item);
    }
}

fn severity_colored(severity: Option<&str>) -> colored::ColoredString {
    match severity {
        Some(s) if s.eq_ignore_ascii_case("low") => s.green(),
        Some(s) if s.eq_ignore_ascii_case("medium") => s.yellow(),
        Some(s) if s.eq_ignore_ascii_case("high") => s.red(),
        Some(s) if s.eq_ignore_ascii_case("critical") => s.red().bold(),
        // Unrecognized severities are shown as-is; the contract is permissive.
        Some(s) => s.normal(),
        None => "(not reported)".normal(),
    }
}
