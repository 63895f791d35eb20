//! Likeness Solver - CLI
//!
//! Terminal-hacking password solver with TUI and CLI modes. Each attempt's
//! likeness eliminates candidates; minimax picks the attempt that leaves the
//! fewest in the worst case.

use anyhow::Result;
use clap::{Parser, Subcommand};
use likeness_solver::{
    commands::{
        SolveConfig, analyze_candidates, run_benchmark, run_simple, select_secrets, solve_word,
    },
    core::Candidate,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{StrategyType, View},
    wordlists::loader::load_words,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "likeness_solver",
    about = "Password solver for terminal hacking puzzles using likeness and minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Passwords: 'default' (built-in list), a file with one per line, or a comma list
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// How remaining passwords are shown
    #[arg(short, long, global = true, value_enum, default_value_t = View::List)]
    view: View,

    /// Strategy for solve and benchmark: minimax (default), random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (type the passwords, then the likeness of each attempt)
    Simple,

    /// Solve against a known secret password
    Solve {
        /// The secret password
        secret: String,

        /// Show every attempt with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score every password as the next attempt
    Analyze,

    /// Solve every password (or a random sample) and report statistics
    Benchmark {
        /// Number of random secrets to play instead of all of them
        #[arg(short = 'n', long)]
        sample: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let strategy = StrategyType::from_name(&cli.strategy);
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.words.as_deref(), cli.view),
        Commands::Simple => {
            // Without --words the passwords are typed in at the prompt
            let initial = cli.words.as_deref().map(load_words).transpose()?;
            run_simple(cli.view, initial)
        }
        Commands::Solve { secret, verbose } => {
            let candidates = load_candidates(cli.words.as_deref())?;
            let result = solve_word(SolveConfig::new(secret), &candidates, &strategy)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze => {
            let candidates = load_candidates(cli.words.as_deref())?;
            let result = analyze_candidates(&candidates)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { sample } => {
            let candidates = load_candidates(cli.words.as_deref())?;
            let secrets = select_secrets(&candidates, sample);
            println!(
                "Running benchmark on {} of {} passwords...",
                secrets.len(),
                candidates.len()
            );
            let result = run_benchmark(&candidates, &secrets, &strategy)?;
            print_benchmark_result(&result, strategy.name());
            Ok(())
        }
    }
}

/// Load the password list selected by `-w`, falling back to the built-in one
fn load_candidates(source: Option<&str>) -> Result<Vec<Candidate>> {
    let candidates = load_words(source.unwrap_or("default"))?;
    info!(count = candidates.len(), "passwords loaded");
    Ok(candidates)
}

fn run_play_command(source: Option<&str>, view: View) -> Result<()> {
    use likeness_solver::interactive::{App, run_tui};

    let candidates = load_candidates(source)?;
    let app = App::new(candidates, view)?;
    run_tui(app)
}
