use anyhow::{Context, Result};
use clap::Parser;
use noughtbot::protocol::ProtocolEngine;
use noughtbot::{Board, Mark, Outcome, SearchParams, Searcher};
use std::io::{self, Write};

const HUMAN: Mark = Mark::X;
const AI: Mark = Mark::O;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against a perfect minimax engine", long_about = None)]
struct Args {
    /// Let the engine (O) open the game
    #[arg(long)]
    ai_first: bool,

    /// Use plain minimax instead of alpha-beta
    #[arg(long)]
    plain: bool,

    /// Starting position, e.g. "X../.O./..."
    #[arg(long)]
    board: Option<String>,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,

    /// Speak the line protocol on stdin/stdout instead of playing interactively
    #[arg(long)]
    protocol: bool,
}

fn print_guide() {
    println!("\nBoard positions (for your move):");
    for row in 0..3 {
        println!(" {} | {} | {}", row * 3 + 1, row * 3 + 2, row * 3 + 3);
        if row < 2 { println!("-----------"); }
    }
    println!();
}

fn get_human_move(board: &Board) -> Result<usize> {
    loop {
        print!("Enter your move (1-9): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { anyhow::bail!("stdin closed"); }
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => {
                if board.is_empty(n - 1) { return Ok(n - 1); }
                println!("That square is already taken. Choose another.");
            }
            Ok(_) => println!("Please enter a number between 1 and 9."),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.protocol {
        let mut engine = ProtocolEngine::new(SearchParams { use_pruning: !args.plain, maximizer: AI });
        engine.run_loop()?;
        return Ok(());
    }

    let first = if args.ai_first { AI } else { HUMAN };
    let mut board = match args.board.as_deref() {
        Some(s) => s.parse::<Board>().context("invalid --board")?,
        None => Board::new(),
    };
    let mut player = board.side_to_move(first);
    let mut searcher = Searcher::new(SearchParams { use_pruning: !args.plain, maximizer: AI });

    println!("You are '{}'. The engine is '{}'.", HUMAN, AI);
    print_guide();
    println!("{}", board);

    while !board.is_terminal() {
        println!("--- {}'s turn ---", player);
        let mv = if player == HUMAN {
            get_human_move(&board)?
        } else {
            if args.verbose {
                println!("Thinking ({})...", if args.plain { "minimax" } else { "alpha-beta" });
            }
            let mv = searcher.get_best_move(&board, player)?;
            if args.verbose {
                println!("nodes: {} elapsed: {:.4}s", searcher.nodes(), searcher.elapsed().as_secs_f64());
            }
            println!("Engine plays square {}", mv + 1);
            mv
        };
        board.play(mv, player)?;
        println!("\n{}", board);
        player = player.opponent();
    }

    match board.outcome() {
        Some(Outcome::Win(m)) if m == AI => println!("*** The engine ({}) wins! ***", AI),
        Some(Outcome::Win(_)) => println!("*** Congratulations! You ({}) win! ***", HUMAN),
        _ => println!("*** It's a draw! ***"),
    }
    Ok(())
}
