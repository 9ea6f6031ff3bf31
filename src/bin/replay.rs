//! Scripted replay driver: feeds a move script to a snake engine and prints
//! every frame as plain text.
//!
//! Usage: replay [--preset NAME] [--seed N] [--quiet] [--json] MOVES

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use snake_engine::build_info;
use snake_engine::engine::{
    BoardPreset, Coord, Direction, EngineConfig, GameStatus, Score, SnakeEngine,
};
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct ReplayArgs {
    preset: Option<BoardPreset>,
    seed: Option<u64>,
    quiet: bool,
    json: bool,
    moves: Vec<Direction>,
}

#[derive(Debug, Serialize)]
struct ReplaySummary {
    preset: &'static str,
    moves_requested: usize,
    moves_played: usize,
    status: GameStatus,
    score: Score,
    remaining_food: Coord,
    length: usize,
}

enum Command {
    Help,
    Version,
    Replay(ReplayArgs),
}

fn print_help() {
    println!("replay - play a scripted snake game\n");
    println!("Usage: replay [options] MOVES\n");
    println!("MOVES is a string of U, D, L, R (spaces and commas are ignored).\n");
    println!("Options:");
    println!("  --preset NAME  Novice, Apprentice, Journeyman or Master (default Novice)");
    println!("  --seed N       Seed the food placement for a repeatable game");
    println!("  --quiet        Only print the final board");
    println!("  --json         Print the summary as JSON");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

fn parse_moves(script: &str) -> Result<Vec<Direction>, String> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Direction::try_from(c).map_err(|e| e.to_string()))
        .collect()
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut parsed = ReplayArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--preset" => {
                let name = iter.next().ok_or("--preset needs a value")?;
                let preset = BoardPreset::from_name(name)
                    .ok_or_else(|| format!("unknown preset: {}", name))?;
                parsed.preset = Some(preset);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                parsed.seed = Some(seed);
            }
            "--quiet" | "-q" => parsed.quiet = true,
            "--json" => parsed.json = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {}", other));
            }
            script => parsed.moves.extend(parse_moves(script)?),
        }
    }

    Ok(Command::Replay(parsed))
}

fn run(args: ReplayArgs) -> Result<ReplaySummary, String> {
    let preset = args.preset.unwrap_or(BoardPreset::Novice);
    let config = EngineConfig::from_preset(preset);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine =
        SnakeEngine::from_config_with_rng(&config, rng).map_err(|e| e.to_string())?;
    debug!(preset = preset.name(), moves = args.moves.len(), "replay started");

    if !args.quiet {
        print!("{}", engine.render());
    }

    let mut played = 0;
    let mut status = GameStatus::Continue;
    for &direction in &args.moves {
        status = engine.step(direction).map_err(|e| e.to_string())?;
        played += 1;
        if !args.quiet {
            println!("move {}: {:?} -> {:?}", played, direction, status);
            print!("{}", engine.render());
        }
        if status.is_terminal() {
            break;
        }
    }

    if played < args.moves.len() {
        warn!(
            skipped = args.moves.len() - played,
            "moves left over after the game ended"
        );
    }
    if args.quiet {
        print!("{}", engine.render());
    }

    Ok(ReplaySummary {
        preset: preset.name(),
        moves_requested: args.moves.len(),
        moves_played: played,
        status,
        score: engine.current_score(),
        remaining_food: engine.remaining_food(),
        length: engine.snake().len(),
    })
}

fn print_summary(summary: &ReplaySummary, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(summary).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        println!(
            "{:?} after {}/{} moves: score {}, food left {}, length {}",
            summary.status,
            summary.moves_played,
            summary.moves_requested,
            summary.score,
            summary.remaining_food,
            summary.length
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'replay --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("replay {}", build_info::version_line());
            ExitCode::SUCCESS
        }
        Command::Replay(args) => {
            let json = args.json;
            match run(args).and_then(|summary| print_summary(&summary, json)) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("replay failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
