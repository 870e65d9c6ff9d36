use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};
use rand::Rng;

mod logger;
mod smoke;
mod tester;

#[derive(Parser, Debug)]
#[command(version, about = "Exercises the singly linked list against a reference model")]
struct Args {
    /// trace, debug, info, warn, error or off
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay random operations and compare with a vector after every step
    Run {
        /// random when omitted
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10_000)]
        ops: usize,
        #[arg(long, default_value_t = tester::DEFAULT_MAX_LEN)]
        max_len: usize,
    },
    /// Run the fixed scenarios
    Smoke,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level)?;

    match args.command {
        Command::Run { seed, ops, max_len } => {
            let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
            info!("replaying {ops} operations with seed {seed}");
            let config = tester::RunConfig { seed, ops, max_len };
            match tester::run(&config) {
                Ok(summary) => info!(
                    "ok: {} operations, final length {}, peak length {}",
                    summary.ops, summary.final_len, summary.peak_len
                ),
                Err(failure) => {
                    error!("{failure}");
                    failure.playback();
                    return Err(failure.into());
                }
            }
        }
        Command::Smoke => smoke::run_all()?,
    }
    Ok(())
}
