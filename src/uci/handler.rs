//! UCI command handler and main loop.

use super::parser::{parse_command, UciCommand};
use super::{format_move, SearchParams, ENGINE_AUTHOR, ENGINE_NAME};
use crate::eval::MaterialEvaluator;
use crate::position::{ChessPosition, Position, Side};
use crate::search::Searcher;
use crate::types::Depth;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Deepest search accepted through "setoption" or "go depth".
const MAX_UCI_DEPTH: i32 = 8;

/// UCI protocol handler
pub struct UciHandler<W: Write = io::Stdout> {
    /// Current position, with the moves that led to it
    position: ChessPosition,
    searcher: Searcher<MaterialEvaluator>,
    /// Depth used when "go" names none
    depth: Depth,
    /// Debug mode enabled
    debug: bool,
    /// Should the engine quit
    quit: bool,
    out: W,
}

impl UciHandler<io::Stdout> {
    pub fn new(depth: Depth) -> Self {
        Self::with_output(depth, io::stdout())
    }

    /// Run the UCI main loop on stdin (blocking)
    pub fn run(&mut self) {
        let stdin = io::stdin();
        self.run_with(stdin.lock());
    }
}

impl<W: Write> UciHandler<W> {
    pub fn with_output(depth: Depth, out: W) -> Self {
        Self {
            position: ChessPosition::default(),
            searcher: Searcher::default(),
            depth,
            debug: false,
            quit: false,
            out,
        }
    }

    /// Process commands until "quit" or end of input
    pub fn run_with(&mut self, reader: impl BufRead) {
        for line in reader.lines() {
            match line {
                Ok(input) => {
                    if self.debug {
                        debug!("< {}", input);
                    }
                    self.handle_input(&input);
                    if self.quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!("stdin closed: {}", e);
                    break;
                }
            }
        }
    }

    /// Handle a single UCI command
    pub fn handle_input(&mut self, input: &str) {
        let cmd = parse_command(input);
        self.handle_command(cmd);
    }

    pub fn position(&self) -> &ChessPosition {
        &self.position
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn handle_command(&mut self, cmd: UciCommand) {
        match cmd {
            UciCommand::Uci => self.cmd_uci(),
            UciCommand::Debug(on) => self.debug = on,
            UciCommand::IsReady => self.send("readyok"),
            UciCommand::SetOption { name, value } => self.cmd_setoption(&name, value.as_deref()),
            UciCommand::UciNewGame => self.position = ChessPosition::default(),
            UciCommand::Position { fen, moves } => self.cmd_position(fen.as_deref(), &moves),
            UciCommand::Go(params) => self.cmd_go(params),
            UciCommand::Stop => {}
            UciCommand::Quit => self.quit = true,
            UciCommand::Display => self.cmd_display(),
            UciCommand::Unknown(s) => {
                if !s.is_empty() {
                    warn!("Unknown command: {}", s);
                }
            }
        }
    }

    /// Send output to GUI
    fn send(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
        self.out.flush().ok();
    }

    // === UCI Commands ===

    fn cmd_uci(&mut self) {
        self.send(&format!("id name {}", ENGINE_NAME));
        self.send(&format!("id author {}", ENGINE_AUTHOR));
        self.send(&format!(
            "option name Depth type spin default {} min 1 max {}",
            self.depth.raw(),
            MAX_UCI_DEPTH
        ));
        self.send("uciok");
    }

    fn cmd_setoption(&mut self, name: &str, value: Option<&str>) {
        match name.to_lowercase().as_str() {
            "depth" => match value.and_then(|v| v.parse::<i32>().ok()) {
                Some(d) => self.depth = Depth::new(d.clamp(1, MAX_UCI_DEPTH)),
                None => warn!("Bad Depth value: {:?}", value),
            },
            _ => warn!("Unknown option: {}", name),
        }
    }

    fn cmd_position(&mut self, fen: Option<&str>, moves: &[String]) {
        self.position = match fen {
            Some(f) => match ChessPosition::from_fen(f) {
                Ok(pos) => pos,
                Err(e) => {
                    warn!("{}", e);
                    ChessPosition::default()
                }
            },
            None => ChessPosition::default(),
        };

        // Applied moves stay on the history for repetition detection
        for move_str in moves {
            match self.position.parse_move(move_str) {
                Some(m) => self.position.apply(m),
                None => {
                    warn!("Invalid move: {}", move_str);
                    break;
                }
            }
        }
    }

    fn cmd_go(&mut self, params: SearchParams) {
        if !params.ignored_limits.is_empty() {
            debug!(limits = ?params.ignored_limits, "fixed-depth search, limits ignored");
        }
        let depth = params
            .depth
            .map(|d| Depth::new(d.raw().clamp(1, MAX_UCI_DEPTH)))
            .unwrap_or(self.depth);

        let result = self.searcher.search_root(&mut self.position, depth);
        let stats = self.searcher.stats().clone();

        // UCI scores are from the mover's point of view
        let score = match self.position.side_to_move() {
            Side::First => result.score,
            Side::Second => -result.score,
        };

        self.send(&format!(
            "info depth {} score {} nodes {} nps {} time {}",
            stats.depth.raw(),
            score,
            stats.nodes,
            stats.nps(),
            stats.time_ms
        ));

        match result.best_move {
            Some(m) => self.send(&format!("bestmove {}", format_move(m))),
            None => self.send("bestmove 0000"),
        }
    }

    fn cmd_display(&mut self) {
        // Non-standard debug command
        let fen = self.position.fen();
        let side = self.position.side_to_move();
        self.send(&format!("FEN: {}", fen));
        self.send(&format!("Side to move: {:?}", side));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &str) -> (String, ChessPosition) {
        let mut handler = UciHandler::with_output(Depth::new(2), Vec::new());
        handler.run_with(lines.as_bytes());
        let position = handler.position().clone();
        let out = String::from_utf8(handler.into_output()).unwrap();
        (out, position)
    }

    #[test]
    fn test_handshake() {
        let (out, _) = run("uci\nisready\nquit\n");
        assert!(out.contains("id name chessbot"));
        assert!(out.contains("option name Depth type spin default 2"));
        assert!(out.contains("uciok"));
        assert!(out.trim_end().ends_with("readyok"));
    }

    #[test]
    fn test_go_finds_capture() {
        let (out, _) = run("position fen 4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1\ngo depth 2\n");
        assert!(out.contains("info depth 2 score cp"));
        assert!(out.contains("bestmove d2d5"));
    }

    #[test]
    fn test_position_with_moves() {
        let (_, pos) = run("position startpos moves e2e4 e7e5 g1f3\n");
        assert_eq!(pos.ply_count(), 3);
        assert_eq!(pos.side_to_move(), Side::Second);
    }

    #[test]
    fn test_invalid_move_stops_replay() {
        let (_, pos) = run("position startpos moves e2e4 e2e4 d7d5\n");
        assert_eq!(pos.ply_count(), 1);
    }

    #[test]
    fn test_mated_position_has_no_move() {
        let (out, _) = run(
            "position fen rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3\ngo\n",
        );
        assert!(out.contains("bestmove 0000"));
    }

    #[test]
    fn test_score_from_movers_view() {
        // Black to move and up a queen: positive for the mover
        let (out, _) = run("position fen 3qk3/8/8/8/8/8/8/4K3 b - - 0 1\ngo depth 1\n");
        let info = out.lines().find(|l| l.starts_with("info")).unwrap();
        let cp: i32 = info.split_whitespace().nth(5).unwrap().parse().unwrap();
        assert!(cp > 800);
    }

    #[test]
    fn test_setoption_depth() {
        let (out, _) = run("setoption name Depth value 1\ngo\n");
        assert!(out.contains("info depth 1 "));
        let (out, _) = run("setoption name Depth value 99\nuci\n");
        assert!(out.contains("default 8"));
    }
}
