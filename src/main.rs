//! Swipecore CLI - drive an assessment from the terminal
//!
//! Usage:
//!   swipecore --answers "u r r l d ..."      # Score a full answer sequence
//!   swipecore --all up                       # Answer every card the same way
//!   swipecore --interactive                  # Swipe through cards on stdin
//!   swipecore --dump-catalog                 # Print the question catalog as JSON
//!   swipecore --answers "..." --json         # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

use swipecore::config::ClassifierConfig;
use swipecore::core::{Assessment, QuestionCatalog, TypeClassifier};
use swipecore::types::{CategoryScores, ClassificationResult, Direction, Question};
use swipecore::{AssessmentError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "swipecore",
    version = VERSION,
    about = "Score a 57-card swipe assessment and classify the swipe type",
    long_about = "Swipecore turns a completed sequence of swipes into connection and\n\
                  enneagram score vectors and classifies them into one of eight\n\
                  swipe types.\n\n\
                  Directions:\n  \
                  up (u)     - strong yes (+2)\n  \
                  right (r)  - yes (+1)\n  \
                  left (l)   - no (-1)\n  \
                  down (d)   - strong no (-2)"
)]
struct Args {
    /// Full answer sequence in presentation order (comma or space separated)
    #[arg(short, long, conflicts_with_all = ["all", "interactive"])]
    answers: Option<String>,

    /// Answer every card with the same direction
    #[arg(long, conflicts_with = "interactive")]
    all: Option<Direction>,

    /// Swipe through the cards one line at a time
    #[arg(short, long)]
    interactive: bool,

    /// Print the question catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,

    /// Load the question catalog from a JSON file
    #[arg(long)]
    catalog: Option<String>,

    /// Load classifier thresholds / tables from a TOML file
    #[arg(long)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show score breakdown and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SWIPECORE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &args.catalog {
        Some(path) => Arc::new(QuestionCatalog::from_file(path)?),
        None => QuestionCatalog::builtin(),
    };

    if args.dump_catalog {
        println!("{}", catalog.to_json_pretty());
        return Ok(());
    }

    let classifier = match &args.config {
        Some(path) => TypeClassifier::from_config(&ClassifierConfig::from_file(path)?)?,
        None => TypeClassifier::new(),
    };
    let mut assessment = Assessment::new(catalog).with_classifier(classifier);

    match answer_mode(args)? {
        AnswerMode::Sequence(directions) => {
            check_answer_count(directions.len(), assessment.progress().total)?;
            for direction in directions {
                if assessment.answer_current(direction).transpose()?.is_none() {
                    break;
                }
            }
        }
        AnswerMode::Uniform(direction) => {
            while assessment.answer_current(direction).transpose()?.is_some() {}
        }
        AnswerMode::Interactive => {
            run_interactive(&mut assessment, args)?;
            if !assessment.is_complete() {
                return Ok(());
            }
        }
    }

    let result = assessment.classify()?;
    let scores = assessment.calculate_scores()?;
    print_result(&result, &scores, args);
    Ok(())
}

/// How the cards get answered
#[derive(Debug, PartialEq)]
enum AnswerMode {
    Sequence(Vec<Direction>),
    Uniform(Direction),
    Interactive,
}

fn answer_mode(args: &Args) -> Result<AnswerMode, String> {
    if let Some(ref answers) = args.answers {
        Ok(AnswerMode::Sequence(parse_answers(answers)?))
    } else if let Some(direction) = args.all {
        Ok(AnswerMode::Uniform(direction))
    } else if args.interactive {
        Ok(AnswerMode::Interactive)
    } else {
        Err("nothing to do: pass --answers, --all, --interactive or --dump-catalog".to_string())
    }
}

/// More answers than cards is a caller mistake, not something to drop silently
fn check_answer_count(given: usize, total: usize) -> Result<(), String> {
    if given > total {
        return Err(format!("got {} answers for {} cards", given, total));
    }
    Ok(())
}

/// Split "u,r l,down" into directions
fn parse_answers(raw: &str) -> Result<Vec<Direction>, String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Interactive mode - one swipe per line, `undo`, `reset`, `quit`
fn run_interactive(assessment: &mut Assessment, args: &Args) -> Result<(), AssessmentError> {
    print_header(args.no_color);
    println!("Swipe with u / r / l / d (or up / right / left / down).");
    println!("Type 'undo' to go back, 'reset' to start over, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    while let Some(question) = assessment.current_question() {
        print_card(question, assessment);
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => {
                println!("\nSession ended at {}.", assessment.progress().to_bar_string(20));
                break;
            }
            "undo" => {
                if assessment.undo_last_response().is_none() {
                    println!("{}", "Nothing to undo.".yellow());
                }
                continue;
            }
            "reset" => {
                assessment.reset();
                println!("{}", "Answers cleared.".yellow());
                continue;
            }
            _ => {}
        }

        match line.parse::<Direction>() {
            Ok(direction) => {
                if let Some(result) = assessment.answer_current(direction) {
                    result?;
                    println!("  {} {}", direction.arrow().green(), direction);
                }
            }
            Err(e) => println!("{}", e.yellow()),
        }
    }

    Ok(())
}

fn print_header(no_color: bool) {
    let title = format!("  Swipecore v{} - Interactive  ", VERSION);
    if no_color {
        println!("========================================");
        println!("{}", title);
        println!("========================================");
    } else {
        println!("{}", title.bold().reversed());
    }
    println!();
}

fn print_card(question: &Question, assessment: &Assessment) {
    println!();
    println!("{}", assessment.progress().to_bar_string(20).dimmed());
    println!("{} {}", format!("#{:>2}", question.id).cyan(), question.text.bold());
}

fn print_result(result: &ClassificationResult, scores: &CategoryScores, args: &Args) {
    if args.json {
        #[derive(serde::Serialize)]
        struct Output<'a> {
            result: &'a ClassificationResult,
            scores: &'a CategoryScores,
        }
        let out = Output { result, scores };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
        println!("  {}", result.swipe_type.description().italic());
    }

    if args.verbose {
        print_scores(scores);
    }
}

fn print_scores(scores: &CategoryScores) {
    println!();
    println!("Connection:");
    for (category, score) in scores.ranked_connection() {
        println!("  {:<20} {:>6.3} {}", category.label(), score, bar(score));
    }
    println!("Enneagram:");
    for (t, score) in scores.ranked_enneagram() {
        println!("  {} {:<16} {:>6.3} {}", t.number(), t.label(), score, bar(score));
    }
}

/// Ten-cell bar over the [-2, 2] score range
fn bar(score: f64) -> String {
    let cells = (((score + 2.0) / 4.0) * 10.0).round().clamp(0.0, 10.0) as usize;
    format!("{}{}", "█".repeat(cells), "·".repeat(10 - cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("swipecore").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_answers_mixed_separators() {
        let parsed = parse_answers("u, right  l,down").unwrap();
        assert_eq!(parsed, vec![Direction::Up, Direction::Right, Direction::Left, Direction::Down]);
        assert!(parse_answers("u x").is_err());
    }

    #[test]
    fn test_interactive_needs_its_flag() {
        assert!(answer_mode(&args(&[])).is_err());
        assert_eq!(answer_mode(&args(&["--interactive"])).unwrap(), AnswerMode::Interactive);
        assert_eq!(answer_mode(&args(&["--all", "up"])).unwrap(), AnswerMode::Uniform(Direction::Up));
    }

    #[test]
    fn test_too_many_answers_rejected() {
        assert!(check_answer_count(57, 57).is_ok());
        assert!(check_answer_count(12, 57).is_ok());
        let err = check_answer_count(58, 57).unwrap_err();
        assert!(err.contains("58"));
    }
}
