//! Display functions for command results

use super::formatters::{
    coverage_bar, create_progress_bar, format_duration, letters_to_string, puzzle_sides,
};
use crate::commands::{AnalysisResult, BatchStatistics, RunStatus, SolveResult};
use crate::solver::{Chain, SolveOutcome};
use colored::Colorize;

fn print_chain(chain: &Chain) {
    let words: Vec<String> = chain
        .words()
        .iter()
        .map(|word| word.text().bright_green().bold().to_string())
        .collect();
    let separator = " → ".bright_black().to_string();
    println!("  {}", words.join(separator.as_str()));
}

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let needed = result.puzzle.full_mask().count();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.puzzle.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for line in puzzle_sides(&result.puzzle) {
            println!("  {line}");
        }
        println!(
            "\n  Dictionary:  {} examined, {} legal",
            result.examined, result.valid
        );
    }

    println!();
    match &result.outcome {
        SolveOutcome::Solved(chain) => {
            print_chain(chain);
            println!(
                "  [{}] {needed}/{needed} letters",
                coverage_bar(needed, needed, 24).green()
            );
            println!();
            println!(
                "{}",
                format!(
                    "✅ Solved in {} word{} ({} letters)",
                    chain.len(),
                    if chain.len() == 1 { "" } else { "s" },
                    chain.letter_total()
                )
                .green()
                .bold()
            );
        }
        SolveOutcome::NoSolutionWithinBound { bound, closest } => {
            if let Some(chain) = closest {
                let covered = chain.coverage().count();
                println!("  Closest attempt:");
                print_chain(chain);
                println!(
                    "  [{}] {covered}/{needed} letters",
                    coverage_bar(covered, needed, 24).yellow()
                );
            }
            let missing = result.missing_letters();
            if !missing.is_empty() {
                println!("  Missing:  {}", letters_to_string(&missing).red());
            }
            println!();
            println!(
                "{}",
                format!("❌ No solution within {bound} words").red().bold()
            );
        }
    }

    if result.all_solutions.len() > 1 {
        println!(
            "\n📋 {}",
            format!("{} minimal solutions", result.all_solutions.len())
                .bright_cyan()
                .bold()
        );
        for (i, chain) in result.all_solutions.iter().enumerate() {
            println!("  {:3}. {chain}", i + 1);
        }
    }

    if verbose {
        let stats = &result.stats;
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Depth reached:      {}", stats.depth_reached);
        println!("   Nodes:              {}", stats.nodes);
        println!("   No-progress prunes: {}", stats.no_progress_pruned);
        println!("   Bound prunes:       {}", stats.bound_pruned);
        println!(
            "   Validation time:    {}",
            format_duration(result.validate_time)
        );
        println!(
            "   Search time:        {}",
            format_duration(result.search_time)
        );
    }
}

/// Print the result of puzzle analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let needed = result.puzzle.full_mask().count();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE ANALYSIS:".bright_cyan().bold(),
        result.puzzle.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 Dictionary:");
    println!("   Examined:   {}", result.examined);
    println!("   Legal:      {}", result.valid.to_string().green());
    println!("   Rejected:   {}", result.rejected);

    if !result.by_distinct.is_empty() {
        println!("\n📈 {}", "Distinct letters per word".bright_cyan().bold());
        let max_count = result.by_distinct.values().copied().max().unwrap_or(1);
        for (&distinct, &count) in &result.by_distinct {
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {distinct:2}: {} {count:5}", bar.green());
        }
    }

    if let Some((word, distinct)) = &result.best_word {
        println!(
            "\n✨ Best single word: {} [{}] {distinct}/{needed}",
            word.bright_green().bold(),
            coverage_bar(*distinct, needed, 24).green()
        );
    }

    println!("\n🔗 {}", "Connectivity".bright_cyan().bold());
    if result.no_outgoing.is_empty() {
        println!("   Every letter starts some word");
    } else {
        println!(
            "   No word starts with: {}",
            letters_to_string(&result.no_outgoing).yellow()
        );
    }
    println!("   Dead-end words:       {}", result.dead_end_words);
    if !result.no_incoming.is_empty() {
        println!(
            "   No word ends with:    {}",
            letters_to_string(&result.no_incoming).yellow()
        );
    }
    println!("   Opening-only words:   {}", result.opening_only_words);
    match result.min_words_lower_bound {
        Some(words) => println!("   Needs at least:       {words} words"),
        None => println!("   Needs at least:       {}", "n/a".bright_black()),
    }

    println!();
    if result.is_provably_unsolvable() {
        println!(
            "{}",
            format!(
                "❌ Unsolvable: no legal word uses {}",
                letters_to_string(&result.unusable)
            )
            .red()
            .bold()
        );
    } else {
        println!("{}", "✅ Every letter appears in some legal word".green());
    }
}

/// Print batch statistics with per-puzzle results
pub fn print_batch_statistics(stats: &BatchStatistics, verbose: bool) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Puzzles:   {}", stats.total_puzzles);
    let percent = |n: usize| {
        if stats.total_puzzles == 0 {
            0.0
        } else {
            n as f64 / stats.total_puzzles as f64 * 100.0
        }
    };
    println!(
        "  Solved:    {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved)).green()
    );
    if stats.unsolved > 0 {
        println!(
            "  Unsolved:  {} {}",
            stats.unsolved,
            format!("({:.1}%)", percent(stats.unsolved)).yellow()
        );
    }
    if stats.invalid > 0 {
        println!(
            "  Invalid:   {} {}",
            stats.invalid,
            format!("({:.1}%)", percent(stats.invalid)).red()
        );
    }
    println!(
        "  Average:   {} words",
        format!("{:.2}", stats.average_words).bright_yellow().bold()
    );
    println!("  Time:      {}", format_duration(stats.total_time));

    if !stats.word_distribution.is_empty() {
        println!("\n📈 {}", "Solution Lengths".bright_cyan().bold());
        let max_count = stats
            .word_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(1);
        for (&words, &count) in &stats.word_distribution {
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {words} words: {bar} {count:4}");
        }
    }

    if let Some((puzzle, nodes)) = &stats.hardest {
        println!("\n😰 {}", "Hardest Puzzle".yellow().bold());
        println!("  {} ({nodes} nodes)", puzzle.yellow());
    }

    if verbose {
        println!("\n📋 {}", "Puzzles".bright_cyan().bold());
        for run in &stats.runs {
            let line = match &run.status {
                RunStatus::Solved { chain, .. } => chain.green().to_string(),
                RunStatus::Unsolved { covered, needed } => {
                    format!("no solution ({covered}/{needed} letters)")
                        .yellow()
                        .to_string()
                }
                RunStatus::Invalid(reason) => format!("invalid: {reason}").red().to_string(),
            };
            println!(
                "  {:20} {line} [{}]",
                run.puzzle,
                format_duration(run.duration)
            );
        }
    }
}
