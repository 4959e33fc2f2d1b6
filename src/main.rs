//! Mastermind Client - CLI
//!
//! Connects to a Mastermind arbiter and solves the game by candidate elimination.
//! Offline `solve` and `benchmark` modes play against an in-process arbiter.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use mastermind_client::{
    commands::{PlayConfig, SolveConfig, play_remote, random_secrets, run_benchmark, solve_secret},
    core::Code,
    exit_codes, logging,
    output::{print_benchmark_result, print_session_report},
    solver::StrategyType,
};

#[derive(Parser, Debug)]
#[command(
    name = "mastermind-client",
    about = "Mastermind client that solves the game by candidate elimination",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arbiter host name or address
    host: Option<String>,

    /// Arbiter TCP port or service name (e.g. 1280, ssh)
    port: Option<String>,

    /// Strategy: last (default), first, minimax, random
    #[arg(
        short,
        long,
        global = true,
        default_value = "last",
        value_parser = ["last", "first", "minimax", "random"]
    )]
    strategy: String,

    /// Show wire values and info-level logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a known secret against the built-in arbiter
    Solve {
        /// Secret as five color letters from b d g o r s v w, e.g. "bdgor"
        secret: Code,

        /// Rounds before the built-in arbiter declares the game lost
        #[arg(short = 'r', long, default_value = "35")]
        max_rounds: u32,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for secret generation
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_with_usage(&err),
    };

    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("mastermind-client: {err:#}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

/// Help and version go to stdout with success, everything else is a usage failure
fn exit_with_usage(err: &clap::Error) -> ! {
    let _ = err.print();
    let code = if err.use_stderr() {
        exit_codes::FAILURE
    } else {
        exit_codes::SUCCESS
    };
    std::process::exit(code)
}

fn run(cli: Cli) -> Result<i32> {
    let strategy = StrategyType::from_name(&cli.strategy);

    match cli.command {
        Some(Commands::Solve { secret, max_rounds }) => {
            run_solve_command(secret, max_rounds, strategy, cli.verbose)
        }
        Some(Commands::Benchmark { count, seed }) => {
            run_benchmark_command(count, seed, &strategy);
            Ok(exit_codes::SUCCESS)
        }
        None => {
            let (Some(host), Some(port)) = (cli.host, cli.port) else {
                let err = Cli::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "both <HOST> and <PORT> are required to play",
                );
                exit_with_usage(&err)
            };
            run_play_command(&PlayConfig::new(host, port), strategy, cli.verbose)
        }
    }
}

fn run_play_command(config: &PlayConfig, strategy: StrategyType, verbose: bool) -> Result<i32> {
    let report = play_remote(config, strategy)?;
    print_session_report(&report, verbose);
    Ok(exit_codes::for_outcome(report.outcome))
}

fn run_solve_command(
    secret: Code,
    max_rounds: u32,
    strategy: StrategyType,
    verbose: bool,
) -> Result<i32> {
    let mut config = SolveConfig::new(secret);
    config.max_rounds = max_rounds;

    println!("Solving: {secret} (strategy: {})", strategy.name());
    let report = solve_secret(&config, strategy)?;
    print_session_report(&report, verbose);
    Ok(exit_codes::for_outcome(report.outcome))
}

fn run_benchmark_command(count: usize, seed: u64, strategy: &StrategyType) {
    println!(
        "Running benchmark on {count} random secrets (seed {seed}, strategy {})...",
        strategy.name()
    );

    let secrets = random_secrets(count, seed);
    let result = run_benchmark(strategy, &secrets, true);
    print_benchmark_result(&result, strategy.name());
}
