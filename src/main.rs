//! Forest of Basics - Terminal Driver
//!
//! A line-oriented front end for the simulation core. Each command either
//! holds movement keys for a stretch of simulated frames or fires one of
//! the player actions, then prints the HUD. While a challenge is open, any
//! line is taken as the answer.
//!
//! Usage: forest-quest [--config forest.toml] [--questions questions.toml]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use forest_quest::core::config::{load_config, GameConfig};
use forest_quest::core::error::Result;
use forest_quest::quest::{AnswerVerdict, Phase, Session};
use forest_quest::questions::{load_question_bank, QuestionBank};
use forest_quest::simulation::MovementIntent;
use forest_quest::ui::LogCategory;

/// Host refresh rate the driver pretends to run at
const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Default hold time for a movement command
const DEFAULT_MOVE_SECONDS: f64 = 0.25;

/// Forest of Basics - walk, talk and answer your way through the quest
#[derive(Parser, Debug)]
#[command(name = "forest-quest")]
#[command(about = "Play the Forest of Basics quest in the terminal")]
struct Args {
    /// TOML config overriding the default arena and rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML question set replacing the built-in bank
    #[arg(long)]
    questions: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forest_quest=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let questions = match &args.questions {
        Some(path) => load_question_bank(path, config.session.seed)?,
        None => QuestionBank::basics(config.session.seed),
    };

    tracing::info!("Forest of Basics starting...");
    let mut session = Session::with_questions(config, questions);
    let mut clock = HostClock::default();
    session.tick(clock.now);

    println!("\n=== EnglishCraft: Forest of Basics ===");
    println!();
    println!("Commands:");
    println!("  up/down/left/right [s]  - Walk (combine with '+', e.g. up+right 0.5)");
    println!("  wait [s]                - Let time pass");
    println!("  talk / e                - Talk to Echo the Owl");
    println!("  attack / space          - Challenge the Wraith");
    println!("  status / s              - Show positions and distances");
    println!("  json                    - Print a snapshot as JSON");
    println!("  quit / q                - Exit");
    println!();

    print_log(&session, usize::MAX);

    loop {
        display_hud(&session);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input == "quit" || input == "q" {
            break;
        }

        let logged_before = session.log().total_logged();

        if session.phase() == Phase::Challenge {
            match session.submit_answer(input) {
                Some(outcome) if outcome.verdict == AnswerVerdict::Correct => {
                    tracing::debug!("Correct answer: {:?}", outcome)
                }
                Some(outcome) => tracing::debug!("Wrong answer: {:?}", outcome),
                None => {}
            }
        } else if input.is_empty() {
            continue;
        } else if session.is_over() {
            println!("The forest has gone quiet. Type 'quit' to leave.");
            continue;
        } else {
            run_command(&mut session, &mut clock, input);
        }

        print_new_entries(&session, logged_before);

        if let Some(challenge) = session.challenge() {
            println!();
            println!("*** Word Magic Challenge ***");
            println!("{}", challenge.prompt());
            println!("(type your answer)");
        }
        if session.is_over() {
            println!();
            println!("GAME OVER");
        }
    }

    let snapshot = session.snapshot();
    println!(
        "\nGoodbye! Final state: level {}, {} coins, quest stage {}.",
        snapshot.player.level, snapshot.player.coins, snapshot.quest_stage
    );
    Ok(())
}

/// Fake host timestamps advanced one frame at a time
#[derive(Default)]
struct HostClock {
    now: f64,
}

impl HostClock {
    fn run(&mut self, session: &mut Session, seconds: f64) {
        let frames = (seconds / FRAME_SECONDS).round().max(1.0) as u32;
        for _ in 0..frames {
            self.now += FRAME_SECONDS;
            session.tick(self.now);
        }
    }
}

fn run_command(session: &mut Session, clock: &mut HostClock, input: &str) {
    let mut parts = input.split_whitespace();
    let Some(verb) = parts.next() else {
        return;
    };
    let seconds = parts
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_MOVE_SECONDS);

    match verb {
        "talk" | "e" => {
            if !session.try_talk() {
                println!("Nobody is close enough to talk to.");
            }
        }
        "attack" | "space" => {
            if !session.try_engage() {
                println!("Nothing to attack within reach.");
            }
        }
        "status" | "s" => display_detailed_status(session),
        "json" => match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Could not serialize snapshot: {}", e),
        },
        "wait" => clock.run(session, seconds),
        keys => match parse_intent(keys) {
            Some(intent) => {
                session.set_intent(intent);
                clock.run(session, seconds);
                session.set_intent(MovementIntent::none());
                // One idle frame so the moving flag settles
                clock.run(session, FRAME_SECONDS);
            }
            None => println!("Unknown command: {}", keys),
        },
    }
}

/// Parse `up+left` style key combinations
fn parse_intent(keys: &str) -> Option<MovementIntent> {
    let mut intent = MovementIntent::none();
    for key in keys.split('+') {
        match key {
            "up" => intent.up = true,
            "down" => intent.down = true,
            "left" => intent.left = true,
            "right" => intent.right = true,
            _ => return None,
        }
    }
    Some(intent)
}

fn display_hud(session: &Session) {
    let snapshot = session.snapshot();
    println!();
    println!("--- {} ---", snapshot.status_line());
    let mut hints = Vec::new();
    if snapshot.prompts.talk {
        hints.push("[talk] Echo is nearby");
    }
    if snapshot.prompts.engage {
        hints.push("[attack] The Wraith is within reach");
    }
    if !hints.is_empty() {
        println!("  {}", hints.join("  "));
    }
    if snapshot.camera_disturbance > 0.0 {
        println!("  (the ground shakes: {:.1})", snapshot.camera_disturbance);
    }
}

fn display_detailed_status(session: &Session) {
    let player = session.player();
    let enemy = session.enemy();
    let companion = session.companion();

    println!();
    println!("=== Forest of Basics (t = {:.2}s) ===", session.elapsed());
    println!(
        "  You: ({:.0}, {:.0}) facing {:?}{}",
        player.bounds.position.x,
        player.bounds.position.y,
        player.facing,
        if player.moving { ", moving" } else { "" }
    );
    println!(
        "  Echo: ({:.0}, {:.0}), {:.0} away",
        companion.bounds.position.x,
        companion.bounds.position.y,
        player.bounds.distance_to(&companion.bounds)
    );
    if enemy.alive {
        println!(
            "  Wraith: ({:.0}, {:.0}), {:.0} away, HP {}/{}",
            enemy.bounds.position.x,
            enemy.bounds.position.y,
            player.bounds.distance_to(&enemy.bounds),
            enemy.display_hp(),
            enemy.max_hp
        );
    } else if enemy.spawned {
        println!("  Wraith: defeated");
    }
}

fn print_log(session: &Session, limit: usize) {
    let entries: Vec<_> = session.log().recent().take(limit).collect();
    for entry in entries.into_iter().rev() {
        println!("{}", format_entry(entry.category, &entry.message));
    }
}

/// Print entries pushed since the log's running total was `logged_before`
fn print_new_entries(session: &Session, logged_before: usize) {
    let new_count = session.log().total_logged() - logged_before;
    print_log(session, new_count);
}

fn format_entry(category: LogCategory, message: &str) -> String {
    match category {
        LogCategory::Normal => format!("  {}", message),
        LogCategory::Reward => format!("  + {}", message),
        LogCategory::Damage => format!("  ! {}", message),
    }
}
