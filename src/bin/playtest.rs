//! Headless Playtest
//!
//! Plays the whole quest with a scripted player: walk to Echo, accept the
//! quest, then hunt the Wraith and answer questions with a configurable
//! accuracy. Prints a JSON report.

use std::path::PathBuf;

use clap::Parser;
use forest_quest::core::config::{load_config, GameConfig};
use forest_quest::core::error::Result;
use forest_quest::entity::Bounds;
use forest_quest::quest::{AnswerVerdict, Phase, QuestProgress, Session};
use forest_quest::simulation::MovementIntent;
use forest_quest::ui::SessionSnapshot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Headless Playtest - scripted run through the Forest of Basics quest
#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Play the quest headlessly and report the outcome as JSON")]
struct Args {
    /// TOML config overriding the default arena and rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for question draws and answer accuracy
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that the scripted player answers correctly (0.0 - 1.0)
    #[arg(long, default_value_t = 0.75, value_parser = parse_probability)]
    accuracy: f64,

    /// Simulated frame length in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame: f64,

    /// Give up after this many frames
    #[arg(long, default_value_t = 20_000)]
    max_frames: u64,

    /// Include the final snapshot in the report
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Accept only finite values in [0, 1]
fn parse_probability(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("not a number: {}", e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not in the range 0.0 - 1.0", raw))
    }
}

/// JSON output structure
#[derive(Serialize)]
struct PlaytestReport {
    outcome: String,
    frames: u64,
    simulated_seconds: f64,
    correct_answers: u32,
    wrong_answers: u32,
    final_level: u32,
    final_hp: i32,
    coins: u32,
    seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<SessionSnapshot>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forest_quest=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(|| rand::random());
    config.session.seed = seed;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut session = Session::new(config);
    let mut now = 0.0;
    let mut frames = 0;
    let mut correct_answers = 0;
    let mut wrong_answers = 0;

    session.tick(now);

    while frames < args.max_frames && !session.is_over() {
        if session.quest_progress() == QuestProgress::Complete {
            break;
        }

        if session.phase() == Phase::Challenge {
            let answer = match session.challenge() {
                Some(challenge) if rng.gen_bool(args.accuracy) => {
                    challenge.question.answer.clone()
                }
                _ => "i don't know".to_string(),
            };
            if let Some(outcome) = session.submit_answer(&answer) {
                match outcome.verdict {
                    AnswerVerdict::Correct => correct_answers += 1,
                    AnswerVerdict::Wrong => wrong_answers += 1,
                }
            }
            continue;
        }

        let target = match session.quest_progress() {
            QuestProgress::NotOffered => session.companion().bounds,
            _ => session.enemy().bounds,
        };

        if session.quest_progress() == QuestProgress::NotOffered && session.try_talk() {
            continue;
        }
        if session.try_engage() {
            continue;
        }

        session.set_intent(steer_toward(&session.player().bounds, &target));
        now += args.frame;
        frames += 1;
        session.tick(now);
    }

    let outcome = if session.quest_progress() == QuestProgress::Complete {
        "victory"
    } else if session.is_over() {
        "defeat"
    } else {
        "timeout"
    };
    tracing::info!("Playtest finished: {}", outcome);

    let snapshot = session.snapshot();
    let report = PlaytestReport {
        outcome: outcome.to_string(),
        frames,
        simulated_seconds: snapshot.elapsed,
        correct_answers,
        wrong_answers,
        final_level: snapshot.player.level,
        final_hp: snapshot.player.hp,
        coins: snapshot.player.coins,
        seed,
        snapshot: args.verbose.then_some(snapshot),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Hold the keys that move `from` toward `to`, with a small dead zone
fn steer_toward(from: &Bounds, to: &Bounds) -> MovementIntent {
    const DEAD_ZONE: f32 = 4.0;
    let delta = to.center() - from.center();
    MovementIntent::new(
        delta.y < -DEAD_ZONE,
        delta.y > DEAD_ZONE,
        delta.x < -DEAD_ZONE,
        delta.x > DEAD_ZONE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_accepts_unit_range() {
        assert_eq!(parse_probability("0"), Ok(0.0));
        assert_eq!(parse_probability("0.75"), Ok(0.75));
        assert_eq!(parse_probability("1.0"), Ok(1.0));
    }

    #[test]
    fn test_accuracy_rejects_nan_and_out_of_range() {
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("1.5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("often").is_err());
    }

    #[test]
    fn test_args_reject_nan_accuracy() {
        assert!(Args::try_parse_from(["playtest", "--accuracy", "NaN"]).is_err());
        let args = Args::try_parse_from(["playtest", "--accuracy", "0.5"]).expect("valid accuracy");
        assert_eq!(args.accuracy, 0.5);
    }
}
