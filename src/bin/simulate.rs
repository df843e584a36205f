//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations of whole careers to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 runs of 3 careers
//!   cargo run --bin simulate -- -n 20 -c 1     # 20 single-career runs
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use gridiron::character::attributes::Position;
use gridiron::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridiron=warn")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GRIDIRON BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Careers/Run:    {}", config.careers_per_run);
    println!("  Seasons/Career: {}", config.seasons_per_career);
    match config.position {
        Some(position) => println!("  Position:       {}", position.label()),
        None => println!("  Position:       rotating"),
    }
    println!("  Auto Shop:      {}", config.auto_shop);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-c" | "--careers" => {
                if i + 1 < args.len() {
                    config.careers_per_run = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--seasons" => {
                if i + 1 < args.len() {
                    config.seasons_per_career = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "-p" | "--position" => {
                if i + 1 < args.len() {
                    config.position = Position::from_code(&args[i + 1]);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_career = args[i + 1].parse().unwrap_or(500_000);
                    i += 1;
                }
            }
            "--no-shop" => {
                config.auto_shop = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--legacy" => {
                config = SimConfig::legacy_test();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Gridiron Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 100)");
    println!("    -c, --careers <N>   Careers per run, chained by retirement (default: 3)");
    println!("    --seasons <N>       Retire after season N (default: 5, minimum 3)");
    println!("    -p, --position <P>  Play every career at one position");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max one-second ticks per career (default: 500,000)");
    println!("    --no-shop           Never buy upgrades, drills or attributes");
    println!("    -v, --verbose       Print one line per run");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (20 single-career runs)");
    println!("    --legacy            Long legacies (20 runs of 6 careers)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 20 -c 1     # 20 single-career runs");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- -p LB --quick  # Linebackers only");
}
