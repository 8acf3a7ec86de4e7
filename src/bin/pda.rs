//! Interactive balanced-parentheses checker.
//!
//! Runs the balanced-parentheses automaton on one word and renders the
//! finished trace step by step. Pacing only affects printing; the run itself
//! completes before anything is shown.

use anyhow::{Context, Result};
use clap::Parser;
use pushdown::builder::balanced_parentheses;
use pushdown::core::DEFAULT_CAPACITY;
use pushdown::engine::{run_with, RunOptions, RunOutcome};
use pushdown::report::RunReport;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pda",
    version,
    about = "Check balanced parentheses with a traced pushdown automaton"
)]
struct Cli {
    /// Word to check. Prompts on stdin when omitted.
    #[arg(short, long)]
    word: Option<String>,

    /// Pause between printed steps, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Maximum number of stack symbols, bottom symbol included.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    stack_capacity: usize,

    /// Print the run as a JSON report instead of a step listing.
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();

    if let Err(err) = execute() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn execute() -> Result<()> {
    let cli = Cli::parse();

    let word = match cli.word {
        Some(word) => word,
        None => prompt_word()?,
    };

    let options = RunOptions::default().with_stack_capacity(cli.stack_capacity);
    let definition = balanced_parentheses();
    let outcome = run_with(&definition, &word, &options)
        .with_context(|| format!("automaton fault while checking {word:?}"))?;

    if cli.json {
        let report = RunReport::new(word, outcome);
        println!("{}", report.to_json()?);
        return Ok(());
    }

    render(&word, &outcome, Duration::from_millis(cli.delay_ms));
    Ok(())
}

fn prompt_word() -> Result<String> {
    print!("Enter the string of parentheses: ");
    io::stdout().flush().context("flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read word from stdin")?;
    Ok(line.trim().to_string())
}

fn render(word: &str, outcome: &RunOutcome, delay: Duration) {
    println!("\n--- PDA Simulation Start ---");
    println!("Start: {}", outcome.trace.initial());

    for step in outcome.trace.steps() {
        pause(delay);
        println!(
            "Input '{}' | Top '{}' | {} | {}",
            step.transition.read(),
            step.transition.pop(),
            step.transition,
            step.to
        );
    }

    if let Some(rejection) = &outcome.rejection {
        pause(delay);
        println!("Rejected: {rejection}");
    }

    println!("--- PDA Simulation End ---");
    println!("Final: {}", outcome.final_configuration());

    let verdict = if outcome.accepted {
        "ACCEPTED"
    } else {
        "REJECTED"
    };
    println!("\nResult: the word '{word}' is {verdict} by the automaton.");
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
