//! UCI command parser.

use super::SearchParams;
use crate::types::Depth;

/// Parsed UCI command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    /// "uci" - Initialize UCI mode
    Uci,
    /// "debug on/off"
    Debug(bool),
    /// "isready" - Synchronization
    IsReady,
    /// "setoption name X value Y"
    SetOption { name: String, value: Option<String> },
    /// "ucinewgame" - New game starting
    UciNewGame,
    /// "position startpos/fen [moves ...]"
    Position { fen: Option<String>, moves: Vec<String> },
    /// "go ..." - Start searching
    Go(SearchParams),
    /// "stop" - nothing to interrupt, the search is synchronous
    Stop,
    /// "quit" - Exit the engine
    Quit,
    /// "d" - Debug: display board (non-standard but common)
    Display,
    /// Unknown command
    Unknown(String),
}

/// Parse a UCI command string into a UciCommand
pub fn parse_command(input: &str) -> UciCommand {
    let input = input.trim();
    let mut parts = input.split_whitespace();

    match parts.next() {
        Some("uci") => UciCommand::Uci,
        Some("debug") => {
            let on = parts.next() == Some("on");
            UciCommand::Debug(on)
        }
        Some("isready") => UciCommand::IsReady,
        Some("setoption") => parse_setoption(&mut parts),
        Some("ucinewgame") => UciCommand::UciNewGame,
        Some("position") => parse_position(&mut parts),
        Some("go") => parse_go(&mut parts),
        Some("stop") => UciCommand::Stop,
        Some("quit") => UciCommand::Quit,
        Some("d") => UciCommand::Display,
        _ => UciCommand::Unknown(input.to_string()),
    }
}

/// "setoption name <id> [value <x>]". Both the name and the value may
/// contain spaces; "value" is the only delimiter.
fn parse_setoption<'a>(parts: &mut impl Iterator<Item = &'a str>) -> UciCommand {
    let tokens: Vec<&str> = parts.collect();
    let value_at = tokens.iter().position(|&t| t == "value");
    let name_end = value_at.unwrap_or(tokens.len());

    let name = match tokens.first() {
        Some(&"name") => tokens[1..name_end].join(" "),
        _ => String::new(),
    };
    let value = value_at
        .map(|i| tokens[i + 1..].join(" "))
        .filter(|v| !v.is_empty());

    UciCommand::SetOption { name, value }
}

/// "position startpos|fen <fields> [moves ...]". The FEN is everything
/// between "fen" and "moves", so short FENs without move counters work.
fn parse_position<'a>(parts: &mut impl Iterator<Item = &'a str>) -> UciCommand {
    let tokens: Vec<&str> = parts.collect();
    let (setup, moves) = match tokens.iter().position(|&t| t == "moves") {
        Some(i) => (&tokens[..i], &tokens[i + 1..]),
        None => (&tokens[..], &[][..]),
    };

    let fen = match setup.split_first() {
        Some((&"fen", fields)) if !fields.is_empty() => Some(fields.join(" ")),
        _ => None,
    };

    UciCommand::Position {
        fen,
        moves: moves.iter().map(|m| m.to_string()).collect(),
    }
}

/// Limits that take a value but have no meaning for a fixed-depth search.
const VALUED_LIMITS: [&str; 8] =
    ["movetime", "wtime", "btime", "winc", "binc", "movestogo", "mate", "nodes"];

fn parse_go<'a>(parts: &mut impl Iterator<Item = &'a str>) -> UciCommand {
    let mut params = SearchParams::new();

    let tokens: Vec<&str> = parts.collect();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if let Some(d) = tokens.get(i).and_then(|t| t.parse::<i32>().ok()) {
                    params.depth = Some(Depth::new(d));
                }
            }
            limit if VALUED_LIMITS.contains(&limit) => {
                params.ignored_limits.push(limit.to_string());
                i += 1;
            }
            limit @ ("infinite" | "ponder") => {
                params.ignored_limits.push(limit.to_string());
            }
            "searchmoves" => {
                // Remaining tokens are moves; the engine always searches all of them
                params.ignored_limits.push("searchmoves".to_string());
                break;
            }
            _ => {}
        }
        i += 1;
    }

    UciCommand::Go(params)
}
