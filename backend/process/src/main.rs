use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate a roster seed")]
struct Args {
    /// Seed file, the embedded roster when omitted
    path: Option<PathBuf>,

    /// Print the ranked leaderboard
    #[arg(long)]
    leaderboard: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match process::check(args.path.as_deref(), args.leaderboard) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid roster: {e:#}");
            ExitCode::FAILURE
        }
    }
}
