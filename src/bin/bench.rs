use clap::{Parser, ValueEnum};
use noughtbot::{Board, Mark, SearchParams, Searcher};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side { X, O }

impl From<Side> for Mark {
    fn from(s: Side) -> Mark { match s { Side::X => Mark::X, Side::O => Mark::O } }
}

#[derive(Parser, Debug)]
#[command(name = "noughtbot-bench", version, about = "Compare plain minimax and alpha-beta node counts")]
struct Args {
    /// Board notation or 'empty'
    #[arg(long, default_value = "empty")]
    board: String,

    /// Mark that opened the game (decides who is to move)
    #[arg(long, value_enum, default_value = "x")]
    first: Side,

    /// Maximizing mark
    #[arg(long, value_enum, default_value = "o")]
    maximizer: Side,

    /// Repeat each search this many times
    #[arg(long, default_value_t = 1)]
    iters: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "empty" { Board::new() } else { args.board.parse::<Board>()? };
    let player = board.side_to_move(args.first.into());

    for use_pruning in [false, true] {
        let mut s = Searcher::new(SearchParams { use_pruning, maximizer: args.maximizer.into() });
        let mut total = 0.0f64;
        let mut last = None;
        for _ in 0..args.iters.max(1) {
            let r = s.search(&board, player);
            total += r.elapsed.as_secs_f64();
            last = Some(r);
        }
        if let Some(r) = last {
            let per = total / args.iters.max(1) as f64;
            let nps = if per > 0.0 { r.nodes as f64 / per } else { 0.0 };
            println!(
                "{:<10} bestmove={} score={} nodes={} elapsed={:.4}s nps={:.1}",
                if use_pruning { "alphabeta" } else { "minimax" },
                r.bestmove.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
                r.score, r.nodes, per, nps
            );
        }
    }
    Ok(())
}
