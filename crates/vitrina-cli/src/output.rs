//! Terminal output for suite results.

use console::style;
use vitrina::{ScenarioReport, SuiteReport};

/// Print one scenario result line
pub fn print_report(report: &ScenarioReport) {
    let duration = format!("{:.1}s", report.duration.as_secs_f64());
    if report.is_passed() {
        println!("  {} {} ({duration})", style("PASS").green().bold(), report.name);
    } else {
        println!("  {} {} ({duration})", style("FAIL").red().bold(), report.name);
        if let Some(ref error) = report.error {
            println!("       {error}");
        }
    }
}

/// Print the full suite summary
pub fn print_suite(suite: &SuiteReport) {
    for report in &suite.results {
        print_report(report);
    }
    let line = format!(
        "{} passed, {} failed in {:.1}s",
        suite.passed_count(),
        suite.failed_count(),
        suite.duration.as_secs_f64()
    );
    if suite.all_passed() {
        println!("\n{}", style(line).green());
    } else {
        println!("\n{}", style(line).red());
    }
}
