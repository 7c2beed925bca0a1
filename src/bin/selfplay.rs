use clap::Parser;
use noughtbot::selfplay::{generate_games, write_jsonl, SelfPlayParams};
use noughtbot::{Mark, Outcome};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noughtbot-selfplay", about = "Generate engine-vs-engine games as JSONL")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 2)]
    random_plies: usize,
    #[arg(long, default_value_t = false)]
    plain: bool,
    #[arg(long, default_value_t = false)]
    o_first: bool,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        seed: a.seed,
        random_plies: a.random_plies,
        use_pruning: !a.plain,
        first: if a.o_first { Mark::O } else { Mark::X },
    };
    eprintln!("Generating {} games (threads={}, random_plies={}, pruning={})", a.games, a.threads, a.random_plies, !a.plain);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads.max(1)).build()?;
    let games = pool.install(|| generate_games(&params))?;
    let tally = |o: Outcome| games.iter().filter(|g| g.outcome == o).count();
    eprintln!("X wins: {} O wins: {} draws: {}", tally(Outcome::Win(Mark::X)), tally(Outcome::Win(Mark::O)), tally(Outcome::Draw));
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
