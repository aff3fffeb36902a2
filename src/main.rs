use std::path::PathBuf;

use clap::Parser;
use quizmaster::{AttemptStore, QuizMaster};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz catalog from
    #[arg(short, long, default_value = "quizzes.json")]
    quizzes: PathBuf,

    /// Player name recorded on finished attempts
    #[arg(short, long, default_value = "Anonymous")]
    player: String,

    /// JSON file to append finished attempts to
    #[arg(short, long)]
    attempts: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let mut quiz_master = QuizMaster::from_json(args.quizzes)
        .expect("Failed to load quizzes")
        .with_player_name(args.player);
    if let Some(path) = args.attempts {
        quiz_master = quiz_master.with_attempt_store(AttemptStore::new(path));
    }

    if let Err(e) = quiz_master.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
