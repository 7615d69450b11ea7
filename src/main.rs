//! Mastermind Solver - CLI
//!
//! Breaks Mastermind codes with Knuth's minimax search, plays against a human
//! breaker, or assists a human maker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        AssistOutcome, analyze_code, print_test_all_statistics, run_assist, run_benchmark,
        run_human, run_test_all, solve_code,
    },
    config::GameConfig,
    core::{Code, CodeMaker},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Breaker, Strategy},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = "mastermind.toml";

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code breaker using Knuth's minimax search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default) or first
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Path to a TOML config file (default: ./mastermind.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pegs per code
    #[arg(long, global = true)]
    length: Option<u8>,

    /// Colors per peg
    #[arg(long, global = true)]
    colors: Option<u8>,

    /// Round budget per game
    #[arg(long, global = true)]
    max_rounds: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a random secret yourself (default)
    Play,

    /// Think of a secret and let the solver break it; you enter the feedback
    Assist,

    /// Solve a specific secret, or a random one
    Solve {
        /// The secret code, e.g. 3632
        secret: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a code splits the universe by feedback
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Random seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the config file, apply command-line overrides, then validate
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::read(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG);
            if path.exists() {
                GameConfig::read(path)?
            } else {
                GameConfig::default()
            }
        }
    };

    if let Some(strategy) = &cli.strategy {
        config.strategy.clone_from(strategy);
    }
    if let Some(length) = cli.length {
        config.length = length;
    }
    if let Some(colors) = cli.colors {
        config.colors = colors;
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.max_rounds = max_rounds;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::debug!("{config:?}");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Assist => run_assist_command(&config),
        Commands::Solve { secret, verbose } => {
            run_solve_command(&config, secret.as_deref(), verbose)
        }
        Commands::Analyze { code } => run_analyze_command(&config, &code),
        Commands::Benchmark { count, seed } => run_benchmark_command(&config, count, seed),
        Commands::TestAll { limit } => run_test_all_command(&config, limit),
    }
}

fn run_solve_command(config: &GameConfig, secret: Option<&str>, verbose: bool) -> Result<()> {
    let rules = config.rules()?;
    let secret = match secret {
        Some(text) => Code::parse(text, rules).with_context(|| format!("invalid secret '{text}'"))?,
        None => Code::random(rules, &mut rand::rng()),
    };

    let strategy = config.strategy()?;
    log::info!("solving {secret} with {}", strategy.name());

    let mut breaker = Breaker::with_rules(rules, strategy);
    let result = solve_code(secret, &mut breaker, config.max_rounds)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, code: &str) -> Result<()> {
    let result = analyze_code(code, config.rules()?)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize, seed: Option<u64>) -> Result<()> {
    let rules = config.rules()?;
    let strategy = config.strategy()?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Running benchmark on {count} random secrets ({rules}, {}, seed {seed})...",
        strategy.name()
    );
    log::info!("benchmark: {count} games, seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let result = run_benchmark(rules, &strategy, count, config.max_rounds, &mut rng)?;

    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    let rules = config.rules()?;
    let strategy = config.strategy()?;

    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nRules: {rules} ({} possible secrets)", rules.universe_size());
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(rules, &strategy, config.max_rounds, limit, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let rules = config.rules()?;
    let maker = CodeMaker::random(rules, &mut rand::rng());
    log::info!("play: new {rules} game");

    let result = run_human(&maker, config.max_rounds, io::stdin().lock(), io::stdout())?;
    log::info!(
        "play finished after {} rounds, solved: {}",
        result.rounds_played(),
        result.success
    );
    Ok(())
}

fn run_assist_command(config: &GameConfig) -> Result<()> {
    let rules = config.rules()?;
    let mut breaker = Breaker::with_rules(rules, config.strategy()?);
    log::info!("assist: {rules} with {}", breaker.strategy().name());

    let outcome = run_assist(
        &mut breaker,
        config.max_rounds,
        io::stdin().lock(),
        io::stdout(),
    )?;
    if let AssistOutcome::Solved { rounds } = outcome {
        log::info!("assist solved in {rounds} rounds");
    }
    Ok(())
}
