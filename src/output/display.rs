//! Display functions for game and command results

use super::formatters::{code_label, color_label, create_progress_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, HintReport, ScoreResult};
use crate::game::{Attempt, GameConfig, GameState, Stats};
use crate::hints::Hint;
use colored::Colorize;

/// Print the rules and the palette for this game
pub fn print_rules(config: &GameConfig) {
    println!(
        "Break the {}-peg secret code in {} attempts.",
        config.code_length, config.max_attempts
    );
    println!(
        "The secret {} repeat colors.\n",
        if config.allow_repeats { "may" } else { "does not" }
    );
    println!("Colors (type a name, initial, or number):");
    for (i, &color) in config.palette.iter().enumerate() {
        println!("  {} {} ({})", i + 1, color_label(color), color.initial());
    }
    println!("\nEnter a guess like 'rbgy', '1234' or 'red blue green yellow'.");
    println!(
        "  {} black peg = right color, right position",
        "●".bright_white()
    );
    println!(
        "  {} white peg = right color, wrong position\n",
        "○".bright_white()
    );
}

/// Print one scored attempt
pub fn print_attempt(number: usize, attempt: &Attempt, code_length: usize) {
    println!(
        "  {:>2}. {}  {}  ({})\n",
        number.to_string().bright_black(),
        code_label(&attempt.guess),
        feedback_pegs(attempt.feedback, code_length).bright_white().bold(),
        attempt.feedback
    );
}

/// Print every attempt so far
pub fn print_history(history: &[Attempt], code_length: usize) {
    if history.is_empty() {
        println!("No guesses yet.\n");
        return;
    }
    println!("\n{}", "─".repeat(60).cyan());
    for (i, attempt) in history.iter().enumerate() {
        println!(
            "  {:>2}. {}  {}",
            (i + 1).to_string().bright_black(),
            code_label(&attempt.guess),
            feedback_pegs(attempt.feedback, code_length).bright_white()
        );
    }
    println!("{}\n", "─".repeat(60).cyan());
}

/// Print the hint list
pub fn print_hints(hints: &[Hint]) {
    println!("\n💡 {}", "Analysis of your attempts:".bright_cyan().bold());
    for hint in hints {
        println!("   • {hint}");
    }
    println!(
        "\n   {}\n",
        "Black pegs mean right color AND position. White pegs mean right color, wrong position."
            .bright_black()
    );
}

/// Print the session statistics
pub fn print_stats(stats: &Stats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games_played);
    println!(
        "   Wins:             {} [{}] {:.0}%",
        stats.wins,
        create_progress_bar(stats.win_rate(), 1.0, 20).green(),
        stats.win_rate() * 100.0
    );
    println!(
        "   Avg attempts:     {}",
        stats
            .average_attempts()
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"))
    );
    println!(
        "   Best score:       {}\n",
        stats
            .best_score
            .map_or_else(|| "-".to_string(), |best| best.to_string())
    );
}

/// Print the end-of-game banner with the revealed secret
pub fn print_game_end(game: &GameState, stats: &Stats) {
    let Some(outcome) = game.outcome() else {
        return;
    };
    let max_attempts = game.config().max_attempts;

    println!("\n{}", "═".repeat(70).bright_cyan());
    if outcome.won {
        println!(
            "{}",
            "            🎉  C O D E   B R O K E N !  🎉            "
                .bright_green()
                .bold()
        );
        println!(
            "\n  You broke the code in {} {}!",
            outcome.attempts_used.to_string().bright_cyan().bold(),
            if outcome.attempts_used == 1 {
                "attempt"
            } else {
                "attempts"
            }
        );
    } else {
        println!("{}", "            G A M E   O V E R            ".red().bold());
        println!("\n  The secret code is revealed. Better luck next time!");
    }

    if let Some(secret) = game.revealed_secret() {
        println!("\n  Secret: {}", code_label(secret));
    }
    println!(
        "  Your attempts: {}/{}",
        outcome.attempts_used, max_attempts
    );
    println!("{}", "═".repeat(70).bright_cyan());

    print_stats(stats);
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    let length = result.secret.len();
    println!("\nSecret: {}", code_label(&result.secret));
    println!("Guess:  {}", code_label(&result.guess));
    println!(
        "\n{}  {}",
        feedback_pegs(result.feedback, length).bright_white().bold(),
        result.feedback
    );
    if result.feedback.is_solved(length) {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of the hint command
pub fn print_hint_report(report: &HintReport, code_length: usize) {
    print_history(&report.history, code_length);

    if let Some(outcome) = report.outcome {
        if outcome.won {
            println!(
                "{}",
                format!("✅ Solved in {} attempts", outcome.attempts_used)
                    .green()
                    .bold()
            );
        } else {
            println!(
                "{}",
                format!("❌ Out of attempts after {}", outcome.attempts_used)
                    .red()
                    .bold()
            );
        }
    }

    println!(
        "{} possible codes still fit this history.",
        report.remaining.to_string().bright_yellow()
    );
    if report.remaining <= report.candidates.len() {
        for candidate in &report.candidates {
            println!("  • {}", code_label(candidate));
        }
    }

    print_hints(&report.hints);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games_played);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Avg attempts:     {}",
        stats
            .average_attempts()
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.2}"))
    );
    println!(
        "   Best case:        {}",
        stats
            .best_score
            .map_or_else(|| "-".to_string(), |best| best.to_string())
            .green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution (won games):".bright_cyan().bold());
    for attempts in 1..=result.max_attempts {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / stats.games_played as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    let lost = stats.games_played - stats.wins;
    if lost > 0 {
        println!("   {}", format!("lost: {lost}").red());
    }
}
