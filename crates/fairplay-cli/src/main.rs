//! Fairplay CLI
//!
//! Provably-fair rock-paper-scissors over any odd number of moves. The
//! machine commits to its move with an HMAC before you choose, and reveals
//! the key afterwards so the commitment can be checked.

mod prompt;
mod table;

use clap::{Args, Parser, Subcommand};
use fairplay_core::{
    CircularRules, Commitment, GameError, GameSession, MoveSelector, MoveSet, Outcome, Reveal,
    SecretKey,
};
use prompt::PromptPlayer;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(
    name = "fairplay",
    version,
    about = "Provably-fair rock-paper-scissors for any odd number of moves"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter (tracing env-filter syntax); logs go to stderr
    #[arg(long, global = true, env = "FAIRPLAY_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game against the computer
    Play(PlayArgs),

    /// Print the outcome table for a move set
    Table(MovesArgs),

    /// Check a revealed key and move against a published HMAC
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct MovesArgs {
    /// Moves in cycle order: an odd number, at least three, all unique
    moves: Vec<String>,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    moves: MovesArgs,

    /// Also print the reveal as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Revealed HMAC key (64 hex characters)
    #[arg(long)]
    key: String,

    /// Revealed computer move
    #[arg(long = "move")]
    move_name: String,

    /// HMAC published before the move (64 hex characters)
    #[arg(long)]
    hmac: String,
}

/// Exit code for a rejected move set
const USAGE_ERROR: u8 = 2;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

/// Build the move set, explaining what is wrong with the arguments
fn load_moves(names: Vec<String>) -> Result<MoveSet, ExitCode> {
    MoveSet::new(names).map_err(|err| {
        let hint = match &err {
            GameError::InvalidMoveCount(0) => "You need to add arguments! The number of moves \
                must be at least three, odd, and unique.\n\
                Example: fairplay play rock paper scissors"
                .to_string(),
            GameError::InvalidMoveCount(n) if *n < 3 => {
                format!("Got {} moves; the number of moves must be at least three.", n)
            }
            GameError::InvalidMoveCount(n) => {
                format!("Got {} moves; the number of moves must be odd.", n)
            }
            GameError::DuplicateMove(name) => {
                format!("Moves must be unique; \"{}\" appears more than once.", name)
            }
            other => other.to_string(),
        };
        eprintln!("{}", hint);
        ExitCode::from(USAGE_ERROR)
    })
}

fn print_reveal(reveal: &Reveal) {
    println!();
    println!("Your move: {}", reveal.player_move);
    println!("Computer move: {}", reveal.machine_move);
    println!("HMAC key: {}", reveal.key);
    let verdict = match reveal.outcome {
        Outcome::Draw => "Draw!",
        Outcome::PlayerWins => "You win!",
        Outcome::PlayerLoses => "You lose!",
    };
    println!("{}", verdict);
}

fn run_play(args: PlayArgs) -> ExitCode {
    let moves = match load_moves(args.moves.moves) {
        Ok(moves) => moves,
        Err(code) => return code,
    };
    let help = match table::render(&CircularRules::new(moves.clone())) {
        Ok(help) => help,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let stdin = io::stdin();
    let mut player = PromptPlayer::new(stdin.lock(), io::stdout(), help);
    let mut selector = MoveSelector::thread_rng();

    match GameSession::play(moves, &mut selector, &mut player) {
        Ok(Some(reveal)) => {
            print_reveal(&reveal);
            if args.json {
                match serde_json::to_string_pretty(&reveal) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("failed to encode reveal: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("game abandoned");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("game aborted: {}", e);
            eprintln!("Game aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_table(args: MovesArgs) -> ExitCode {
    match load_moves(args.moves) {
        Ok(moves) => match table::render(&CircularRules::new(moves)) {
            Ok(table) => {
                println!("{}", table);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        },
        Err(code) => code,
    }
}

fn run_verify(args: VerifyArgs) -> ExitCode {
    let parsed = SecretKey::from_hex(&args.key)
        .and_then(|key| Ok((key, args.hmac.parse::<Commitment>()?)));
    let (key, commitment) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    if commitment.verify(&args.move_name, &key) {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("MISMATCH");
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Table(args) => run_table(args),
        Command::Verify(args) => run_verify(args),
    }
}
