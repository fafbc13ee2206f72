//! Terminal and JSON rendering for pipeline results.

use crate::bench::BenchSummary;
use mathgate_core::{Classification, Outcome, SolveReport};
use owo_colors::OwoColorize;

/// Render one solve report for humans.
pub fn render_report(report: &SolveReport, classification: Option<&Classification>) {
    match report.outcome {
        Outcome::Pass => {
            println!("{}", "PASS".green().bold());
            if let Some(category) = report.category {
                println!("  category: {}", category);
            }
            if let Some(answer) = &report.answer {
                println!("  answer:   {}", answer.to_string().bold());
            }
            println!("  {}", report.explanation.dimmed());
        }
        Outcome::Stop => {
            println!("{}", "STOP".red().bold());
            if let Some(reason) = report.stop_reason {
                println!("  reason:   {}", reason.to_string().red());
            }
            if let Some(detail) = &report.stop_detail {
                println!("  detail:   {}", detail);
            }
        }
    }

    if let Some(classification) = classification {
        println!("  route:    {}", report.route);
        println!("  scores:");
        for (category, score) in &classification.all_scores {
            println!("    {:<15} {}", category, score);
        }
        if classification.is_tie {
            println!(
                "  {} best score shared by {:?}",
                "tie:".yellow(),
                classification.matched_categories
            );
        }
    }
}

/// Render a bench summary for humans.
pub fn render_summary(summary: &BenchSummary) {
    for result in &summary.results {
        let status = match (result.outcome, result.is_correct) {
            (Outcome::Pass, Some(true)) => "ok".green().to_string(),
            (Outcome::Pass, Some(false)) => "wrong".red().to_string(),
            (Outcome::Pass, None) => "pass".green().to_string(),
            (Outcome::Stop, _) => "stop".yellow().to_string(),
        };
        println!(
            "  {:<20} {:<6} {:>8} µs  {}",
            result.id,
            status,
            result.elapsed_us,
            result.answer.as_deref().unwrap_or("-")
        );
    }
    println!(
        "\n{} {}/{} passed, {}/{} correct, {} µs total",
        "summary:".bold(),
        summary.passed,
        summary.total_cases,
        summary.correct,
        summary.checked,
        summary.total_elapsed_us
    );
    if summary.cache_hits + summary.cache_misses > 0 {
        println!(
            "cache: {} hits, {} misses",
            summary.cache_hits, summary.cache_misses
        );
    }
}
