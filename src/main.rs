//! Grinflap entry point
//!
//! Headless demo: plays one run with a synthetic smile source standing in
//! for the camera classifier, then prints the leaderboard. Webcam and
//! rendering wiring live outside this crate.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use grinflap::leaderboard::LeaderboardSink;
use grinflap::perception::SyntheticSmiler;
use grinflap::runner::run_until_terminated;
use grinflap::tuning::Tuning;

fn main() {
    env_logger::init();
    log::info!("grinflap starting");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let tuning = Tuning::default();
    let scores_path = PathBuf::from("grinflap_scores.json");
    let sink = LeaderboardSink::new("demo", Some(scores_path));
    // Smile roughly every fourth poll
    let source = SyntheticSmiler::new(4);

    match run_until_terminated(source, sink, tuning, seed) {
        Ok(report) => {
            log::info!(
                "run finished after {} ticks, score {}",
                report.ticks,
                report.final_score
            );
        }
        Err(err) => {
            log::error!("invalid tuning: {err}");
            std::process::exit(1);
        }
    }
}
