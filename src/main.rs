use chessbot::game::SessionId;
use chessbot::uci::{format_move, UciHandler};
use chessbot::{ChessPosition, Depth, EngineConfig, GameMode, Result, SessionStore};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chessbot", version, about = "Fixed-depth alpha-beta chess engine")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<i32>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Speak UCI on stdin/stdout (default)
    Uci,
    /// Interactive games on stdin, one per session
    Play {
        /// "two" for two players, "ai" to play against the engine
        #[arg(long)]
        mode: Option<GameMode>,
    },
    /// Print the engine's move for a position
    Bestmove {
        #[arg(long)]
        fen: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(&config.log_level);

    let outcome = match cli.command.unwrap_or(Command::Uci) {
        Command::Uci => {
            UciHandler::new(config.search_depth()).run();
            Ok(())
        }
        Command::Play { mode } => {
            if let Some(mode) = mode {
                config.mode = mode;
            }
            play(&config)
        }
        Command::Bestmove { fen } => bestmove(&fen, config.search_depth()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout carries only protocol output.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn bestmove(fen: &str, depth: Depth) -> Result<()> {
    let mut position = ChessPosition::from_fen(fen)?;
    match chessbot::choose_move(&mut position, depth) {
        Some(mv) => println!("{}", format_move(mv)),
        None => println!("none"),
    }
    Ok(())
}

/// Line commands: `<uci move>`, `state`, `legal`, `reset`, `mode two|ai`,
/// `session <id>`, `quit`.
fn play(config: &EngineConfig) -> Result<()> {
    let mut sessions = SessionStore::new(config.mode, config.search_depth());
    let mut current: SessionId = "default".to_string();
    sessions.get_or_create(&current);
    info!(mode = ?config.mode, depth = config.depth, "play loop started");

    let stdin = io::stdin();
    let mut out = io::stdout();

    for line in stdin.lock().lines() {
        if !play_line(&mut sessions, &mut current, &line?, &mut out)? {
            break;
        }
        out.flush()?;
    }

    Ok(())
}

/// Handle one line of the play loop. Returns false on `quit`.
fn play_line(
    sessions: &mut SessionStore,
    current: &mut SessionId,
    line: &str,
    out: &mut impl Write,
) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(true);
    };
    let arg = parts.next();

    let game = sessions.get(current)?;
    match (cmd, arg) {
        ("quit", _) => return Ok(false),
        ("state", _) => {
            let snapshot = serde_json::to_string(&game.snapshot())
                .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"));
            writeln!(out, "{}", snapshot)?;
        }
        ("legal", _) => writeln!(out, "{}", game.legal_moves().join(" "))?,
        ("reset", _) => game.reset(),
        ("mode", Some(mode)) => match mode.parse::<GameMode>() {
            Ok(mode) => game.set_mode(mode),
            Err(e) => warn!("{}", e),
        },
        ("session", Some(id)) => {
            *current = id.to_string();
            sessions.get_or_create(current);
        }
        (cmd @ ("mode" | "session"), None) => warn!("`{}` needs an argument", cmd),
        (mv, None) => match game.play(mv) {
            Ok(Some(reply)) => writeln!(out, "reply {}", format_move(reply))?,
            Ok(None) => writeln!(out, "ok")?,
            Err(e) => writeln!(out, "error {}", e)?,
        },
        _ => warn!("Unknown command: {}", line),
    }

    Ok(true)
}
