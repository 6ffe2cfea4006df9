//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, format_duration, group_digits};
use crate::commands::{CurveResult, ScoreResult};
use crate::sequences::SequenceRecord;
use colored::Colorize;

/// Print the report of a scoring run
///
/// At most `max_boards` captured winning boards are shown.
pub fn print_score_result(result: &ScoreResult, max_boards: usize) {
    let report = &result.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DIFFICULTY REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔤 {}", "Run:".bright_cyan().bold());
    println!("   Sequence:         {}", result.sequence.to_uppercase().bright_yellow());
    println!("   Depth:            {}", result.depth);
    println!("   Dictionary:       {} words", result.dictionary_size);
    println!("   Time taken:       {}", format_duration(report.elapsed));
    if result.cancelled {
        println!("   {}", "Cancelled, counts are partial".yellow().bold());
    }

    println!("\n📊 {}", "States:".bright_cyan().bold());
    println!(
        "   Total possible:   {}",
        group_digits(&report.total_possible_states.to_string())
    );
    println!("   Visited:          {}", group_digits(&report.visited_states.to_string()));
    println!("   Pruned branches:  {}", group_digits(&report.pruned_branches.to_string()));
    println!(
        "   Pruned states:    {}",
        group_digits(&report.pruned_states.to_string())
    );
    let pct = report.fraction_pruned * 100.0;
    println!(
        "   Pruned:           [{}] {}",
        create_progress_bar(pct, 100.0, 30).green(),
        format!("{pct:.10}%").bright_yellow()
    );
    let wins = report.winning_states.to_string();
    if report.winning_states > 0 {
        println!("   Winning states:   {}", wins.green().bold());
    } else {
        println!("   Winning states:   {}", wins.red().bold());
    }

    println!("\n🧠 {}", "Match cache:".bright_cyan().bold());
    println!("   Hits:             {}", group_digits(&report.memo_hits.to_string()));
    println!("   Misses:           {}", group_digits(&report.memo_misses.to_string()));
    println!("   Hit rate:         {:.1}%", report.memo_hit_rate() * 100.0);

    if max_boards > 0 && !result.winning_boards.is_empty() {
        let shown = result.winning_boards.len().min(max_boards);
        println!(
            "\n🏆 {} ({shown} of {})",
            "Winning boards:".bright_cyan().bold(),
            result.winning_boards.len()
        );
        for board in result.winning_boards.iter().take(shown) {
            println!();
            for line in board_lines(board, 3) {
                println!("{line}");
            }
        }
    }
}

/// Print a short summary of a curve batch
pub fn print_curve_summary(result: &CurveResult, destination: &str) {
    let finals = result.final_counts();
    println!(
        "{} {} curves to {} in {}",
        "✅".green(),
        result.curves.len(),
        destination.bright_yellow(),
        format_duration(result.duration)
    );
    if let (Some(min), Some(max)) = (finals.iter().min(), finals.iter().max()) {
        println!("   Buildable words at full prefix: {min} to {max}");
    }
}

/// Print a short summary of generated records
pub fn print_generate_summary(records: &[SequenceRecord], destination: &str) {
    println!(
        "{} {} sequences written to {}",
        "✅".green(),
        records.len(),
        destination.bright_yellow()
    );
}
