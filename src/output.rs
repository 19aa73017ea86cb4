// Terminal rendering for the `docsense analyze` command.

use colored::Colorize;

use crate::pipeline::AnalysisResult;
use crate::sentiment::SentimentLabel;

/// Pretty-print an analysis result to the terminal.
pub fn display_analysis(result: &AnalysisResult) {
    println!("\n{}", "=== Sentiment ===".bold());
    let label = result.sentiment.label.to_string();
    let colored_label = match result.sentiment.label {
        SentimentLabel::Positive => label.green().bold(),
        SentimentLabel::Negative => label.red().bold(),
        SentimentLabel::Neutral => label.dimmed(),
    };
    println!(
        "  {} (compound {:+.4}, pos {:.3}, neg {:.3}, neu {:.3})",
        colored_label,
        result.sentiment.compound,
        result.sentiment.positive,
        result.sentiment.negative,
        result.sentiment.neutral,
    );

    println!("\n{}", "=== Entities ===".bold());
    if result.entities.is_empty() {
        println!("  {}", "(none recognized)".dimmed());
    } else {
        for (label, occurrences) in &result.entities {
            println!("  {:<10} {}", label.bold(), occurrences.join(", "));
        }
    }

    println!("\n{}", "=== Topics ===".bold());
    if result.topics.is_empty() {
        println!("  {}", "(not enough data)".dimmed());
    } else {
        for (i, topic) in result.topics.iter().enumerate() {
            println!(
                "  {:>2}. [{:.2}] {}",
                i + 1,
                topic.weight,
                topic.terms.join(", ")
            );
        }
    }
    println!();
}
