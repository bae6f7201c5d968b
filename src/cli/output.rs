//! Output formatting and progress bars for the CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::SeriesResult;

/// Create a progress bar counting games
pub fn create_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the head-to-head tally of a series
pub fn print_series(result: &SeriesResult) {
    print_kv("Games", &format_number(result.episodes));
    print_kv(
        &format!("{} wins", result.first),
        &format!(
            "{} ({:.1}%)",
            format_number(result.first_wins),
            result.first_win_rate() * 100.0
        ),
    );
    print_kv(
        &format!("{} wins", result.second),
        &format!(
            "{} ({:.1}%)",
            format_number(result.second_wins),
            result.second_win_rate() * 100.0
        ),
    );
    print_kv(
        "Draws",
        &format!(
            "{} ({:.1}%)",
            format_number(result.draws),
            result.draw_rate() * 100.0
        ),
    );
}
