use std::io::{self, BufRead, Write};

use crate::board::{Board, Mark};
use crate::search::{SearchParams, Searcher};

/// Line-oriented engine protocol for external front-ends.
///
/// ```text
/// isready                      -> readyok
/// new                          -> (empty board, X opens)
/// position <board> [x|o]       -> (board notation, optional opening mark)
/// pruning on|off
/// go                           -> bestmove <1-9|none> score <u> nodes <n>
/// quit
/// ```
pub struct ProtocolEngine {
    board: Board,
    first: Mark,
    searcher: Searcher,
}

impl Default for ProtocolEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl ProtocolEngine {
    pub fn new(params: SearchParams) -> Self {
        Self { board: Board::new(), first: Mark::X, searcher: Searcher::new(params) }
    }

    pub fn board(&self) -> &Board { &self.board }

    fn cmd_position(&mut self, args: &str) -> Option<String> {
        let mut tokens = args.split_whitespace();
        let notation = tokens.next()?;
        let board = match notation.parse::<Board>() {
            Ok(b) => b,
            Err(e) => return Some(format!("error {e}")),
        };
        let first = match tokens.next() {
            None | Some("x") | Some("X") => Mark::X,
            Some("o") | Some("O") => Mark::O,
            Some(other) => return Some(format!("error unknown side '{other}'")),
        };
        self.board = board;
        self.first = first;
        None
    }

    fn cmd_pruning(&mut self, args: &str) -> Option<String> {
        let use_pruning = match args.trim() {
            "on" => true,
            "off" => false,
            other => return Some(format!("error unknown pruning mode '{other}'")),
        };
        let maximizer = self.searcher.maximizer();
        self.searcher = Searcher::new(SearchParams { use_pruning, maximizer });
        None
    }

    fn cmd_go(&mut self) -> String {
        let player = self.board.side_to_move(self.first);
        let r = self.searcher.search(&self.board, player);
        let mv = r.bestmove.map_or_else(|| "none".to_string(), |m| (m + 1).to_string());
        format!("bestmove {} score {} nodes {}", mv, r.score, r.nodes)
    }

    /// Handles one command. `None` for commands without a reply.
    pub fn handle(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        match line {
            "" => None,
            "isready" => Some("readyok".to_string()),
            "new" => { self.board = Board::new(); self.first = Mark::X; None }
            "go" => Some(self.cmd_go()),
            _ => {
                if let Some(rest) = line.strip_prefix("position ") { return self.cmd_position(rest); }
                if let Some(rest) = line.strip_prefix("pruning ") { return self.cmd_pruning(rest); }
                Some(format!("error unknown command '{line}'"))
            }
        }
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut out = io::stdout().lock();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim() == "quit" { break; }
            if let Some(reply) = self.handle(&line) {
                writeln!(out, "{reply}")?;
                out.flush()?;
            }
        }
        Ok(())
    }
}
