use chrono::Utc;
use gridiron::character::attributes::Position;
use gridiron::commands::advance_season;
use gridiron::core::game_loop::CareerLoop;
use gridiron::core::game_state::GameState;
use gridiron::core::save::{SaveManager, SnapshotStore};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const TICK_INTERVAL_MS: u64 = 100;

struct CliArgs {
    name: String,
    position: Position,
    seconds: Option<u64>,
    fresh: bool,
    advance: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridiron=info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);

    let mut store = SaveManager::new()?;
    let state = if !cli.fresh && store.save_exists() {
        match store.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "could not load career, starting a new one");
                new_career(&cli)
            }
        }
    } else {
        new_career(&cli)
    };

    let mut rng = rand::thread_rng();
    let mut career = CareerLoop::new(state);

    let (_, welcome) = career.resume(&mut rng);
    for line in welcome {
        println!("{}", line);
    }
    print_status(career.state());

    if cli.advance {
        let (state, engine) = career.parts_mut();
        let result = advance_season(state, engine, &mut rng);
        println!("{}", result.message);
    }

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let mut was_off_season = false;

    loop {
        if let Some(limit) = cli.seconds {
            if started.elapsed() >= Duration::from_secs(limit) {
                break;
            }
        }

        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
        let delta = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();

        let result = career.tick(delta, &mut store, &mut rng);
        for message in &result.notifications {
            println!("{}", message);
        }

        let off_season = !career.state().season.phase.is_active();
        if off_season && !was_off_season {
            print_status(career.state());
            println!("The season is over. Run again with --advance to start the next one.");
        }
        was_off_season = off_season;
    }

    let state = career.state_mut();
    state.last_save_time = Utc::now().timestamp_millis();
    store.save(state)?;
    print_status(career.state());
    Ok(())
}

fn new_career(cli: &CliArgs) -> GameState {
    tracing::info!(name = %cli.name, position = cli.position.code(), "starting new career");
    GameState::new(cli.name.clone(), cli.position, Utc::now().timestamp_millis())
}

fn print_status(state: &GameState) {
    let season = &state.season;
    println!(
        "{} ({}, {} OVR) | Season {} {} Week {} | {}-{} | ${:.0} | {:.0} TP | {} fame",
        state.player.name,
        state.player.position.code(),
        state.player.rating(),
        season.season_number,
        season.phase.label(),
        season.current_week,
        season.record.wins,
        season.record.losses,
        state.resources.money,
        state.resources.training_points,
        state.resources.fame,
    );
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        name: "Rookie".to_string(),
        position: Position::QB,
        seconds: None,
        fresh: false,
        advance: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                if i + 1 < args.len() {
                    cli.name = args[i + 1].clone();
                    i += 1;
                }
            }
            "--position" => {
                if i + 1 < args.len() {
                    match Position::from_code(&args[i + 1]) {
                        Some(position) => cli.position = position,
                        None => eprintln!("Unknown position '{}', using QB", args[i + 1]),
                    }
                    i += 1;
                }
            }
            "--seconds" => {
                if i + 1 < args.len() {
                    cli.seconds = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--new" => cli.fresh = true,
            "--advance" => cli.advance = true,
            "--version" | "-v" => {
                println!("gridiron {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    cli
}

fn print_help() {
    println!("Gridiron - Idle Football Career\n");
    println!("USAGE:");
    println!("    gridiron [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --name <NAME>         Player name for a new career (default: Rookie)");
    println!("    --position <POS>      QB, RB, WR, TE, LB, CB or S (default: QB)");
    println!("    --seconds <N>         Stop after N seconds of real time");
    println!("    --new                 Ignore the existing save and start over");
    println!("    --advance             Start the next season if in the off-season");
    println!("    -v, --version         Show version");
    println!("    -h, --help            Show this help");
    println!();
    println!("Saves live in the platform config directory, or in $GRIDIRON_HOME.");
}
