use clap::Parser;
use noughtbot::perft::{count_games, perft};
use noughtbot::{Board, Mark};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Game-tree enumeration driver")]
struct Args {
    /// Depth in plies
    #[arg(value_name = "DEPTH", default_value_t = 9)]
    depth: u32,
    /// Board notation or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Let O open the game
    #[arg(long, default_value_t = false)]
    o_first: bool,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Also tally complete games by outcome
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "empty" { Board::new() } else { args.board.parse::<Board>()? };
    let player = board.side_to_move(if args.o_first { Mark::O } else { Mark::X });

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.threads <= 1 || args.depth == 0 || board.is_terminal() {
            perft(&board, player, args.depth)
        } else {
            board.available_moves().par_iter().map(|&m| {
                let mut child = board;
                child.apply_move(m, player);
                perft(&child, player.opponent(), args.depth - 1)
            }).sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    println!("nodes: {} elapsed: {:.3}s", nodes, dt);

    if args.games {
        let c = count_games(&board, player);
        println!("games: {} x_wins: {} o_wins: {} draws: {}", c.total(), c.x_wins, c.o_wins, c.draws);
    }
    Ok(())
}
