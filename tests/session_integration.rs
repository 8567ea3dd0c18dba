//! Session integration tests
//!
//! Drive a whole play session through the public API only: the same calls
//! an input layer and a host loop would make.

use forest_quest::core::config::GameConfig;
use forest_quest::core::types::Vec2;
use forest_quest::quest::{AnswerVerdict, Phase, QuestProgress, Session};
use forest_quest::questions::{Question, QuestionSource};
use forest_quest::simulation::MovementIntent;
use forest_quest::ui::LogCategory;

/// Always asks the same question
struct OneQuestion;

impl QuestionSource for OneQuestion {
    fn draw_question(&mut self) -> Question {
        Question::new("Spell check: (a) recieve (b) receive", "receive")
    }
}

/// Player starts on top of Echo, and the Wraith spawns inside melee range
/// so it holds still and stays engageable.
fn close_quarters_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.player.start = Vec2::new(350.0, 350.0);
    config.enemy.spawn = Vec2::new(350.0, 330.0);
    config
}

fn session_with_quest() -> Session {
    let mut session = Session::with_questions(close_quarters_config(), OneQuestion);
    session.tick(0.0);
    assert!(session.try_talk());
    session
}

#[test]
fn test_end_to_end_quest() {
    let mut session = Session::with_questions(close_quarters_config(), OneQuestion);
    session.tick(0.0);
    assert_eq!(session.quest_progress(), QuestProgress::NotOffered);

    // Talk: quest offered, enemy materializes at full health
    assert!(session.try_talk());
    assert_eq!(session.quest_progress(), QuestProgress::Active);
    assert!(session.enemy().alive);
    assert_eq!(session.enemy().hp, session.enemy().max_hp);

    // Engage: challenge populated
    assert!(session.try_engage());
    assert_eq!(session.phase(), Phase::Challenge);
    assert_eq!(
        session.challenge().map(|c| c.prompt()),
        Some("Spell check: (a) recieve (b) receive")
    );

    // Wrong answer: hurt, shaken, back to exploring
    let outcome = session.submit_answer("wrong").expect("challenge active");
    assert_eq!(outcome.verdict, AnswerVerdict::Wrong);
    assert_eq!(session.player().hp, 85);
    assert_eq!(session.phase(), Phase::Exploring);
    assert_eq!(session.camera_disturbance(), 5.0);

    // Correct answers until the Wraith dissolves
    let mut rounds = 0;
    while session.enemy().alive {
        assert!(session.try_engage());
        let outcome = session.submit_answer(" Receive ").expect("challenge active");
        assert_eq!(outcome.verdict, AnswerVerdict::Correct);
        rounds += 1;
        assert!(rounds <= 3, "60 hp at 20 per hit should take 3 rounds");
    }
    assert_eq!(rounds, 3);
    assert_eq!(session.quest_progress(), QuestProgress::Complete);
    assert!(!session.enemy().alive);
    assert_eq!(session.snapshot().enemy.hp, 0);
    assert_eq!(session.player().xp, 60);
    assert_eq!(session.player().coins, 30);
    assert_eq!(session.player().level, 2);

    // The Wraith is gone: engaging does nothing
    assert!(!session.try_engage());
    assert_eq!(session.phase(), Phase::Exploring);

    // Echo congratulates
    assert!(session.try_talk());
    assert_eq!(
        session.log().latest().map(|e| e.message.as_str()),
        Some("Echo: 'Great work, hero! The forest is safe.'")
    );
}

#[test]
fn test_each_correct_answer_applies_fixed_rewards() {
    let mut session = session_with_quest();
    for _ in 0..2 {
        let (hp, xp, coins) = (session.enemy().hp, session.player().xp, session.player().coins);
        assert!(session.try_engage());
        session.submit_answer("receive");
        assert_eq!(session.enemy().hp, hp - 20);
        assert_eq!(session.player().xp, xp + 20);
        assert_eq!(session.player().coins, coins + 10);
    }
}

#[test]
fn test_player_death_freezes_session() {
    let mut session = session_with_quest();
    let mut wrong = 0;
    while !session.is_over() {
        assert!(session.try_engage());
        session.submit_answer("nope");
        wrong += 1;
        assert!(wrong <= 7);
    }
    assert_eq!(wrong, 7);
    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(session.player().hp, 0);
    assert_eq!(
        session.log().latest().map(|e| (e.message.as_str(), e.category)),
        Some(("You have fallen. Refresh to try again.", LogCategory::Damage))
    );

    let before = session.snapshot();
    let intent_before = session.world().intent;

    session.tick(1.0);
    session.set_intent(MovementIntent::new(true, false, true, false));
    session.tick(2.0);
    assert!(!session.try_talk());
    assert!(!session.try_engage());
    assert!(session.submit_answer("receive").is_none());
    session.tick(3.0);

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.world().intent, intent_before);
}

#[test]
fn test_large_xp_reward_cascades_levels() {
    let mut config = close_quarters_config();
    config.combat.xp_reward = 400;
    let mut session = Session::with_questions(config, OneQuestion);
    session.tick(0.0);
    session.try_talk();
    session.try_engage();
    let outcome = session.submit_answer("receive").expect("challenge active");
    assert_eq!(outcome.levels_gained, 4);
    assert_eq!(session.player().level, 5);
    assert_eq!(session.player().max_hp, 140);
    assert_eq!(session.player().hp, 140);
}

#[test]
fn test_stale_triggers_are_ignored() {
    let mut session = session_with_quest();
    assert!(session.try_engage());
    let challenge = session.challenge().cloned();

    // Repeated triggers while the question is open change nothing
    assert!(!session.try_engage());
    assert!(!session.try_talk());
    assert_eq!(session.challenge().cloned(), challenge);
    assert_eq!(session.quest_progress(), QuestProgress::Active);

    session.submit_answer("receive");
    assert!(session.submit_answer("receive").is_none());
    assert_eq!(session.enemy().hp, 40);
}

#[test]
fn test_walk_to_echo_with_default_layout() {
    let mut session = Session::new(GameConfig::default());
    let mut now = 0.0;
    session.tick(now);
    assert!(!session.prompts().talk);
    assert!(!session.try_talk());

    session.set_intent(MovementIntent::new(true, false, true, false));
    while !session.prompts().talk {
        now += 1.0 / 60.0;
        session.tick(now);
        assert!(now < 5.0, "never reached Echo");
    }
    assert!(session.player().moving);
    session.set_intent(MovementIntent::none());
    session.tick(now + 1.0 / 60.0);
    assert!(!session.player().moving);

    assert!(session.try_talk());
    assert_eq!(session.quest_progress(), QuestProgress::Active);
    assert_eq!(session.snapshot().objective, "Quest: Defeat the Spelling Wraith.");
}

#[test]
fn test_wraith_approaches_but_keeps_distance() {
    // Default spawn is just outside the pursuit band as seen from Echo
    let mut config = GameConfig::default();
    config.enemy.spawn = Vec2::new(400.0, 250.0);
    let mut session = Session::new(config);
    let mut now = 0.0;
    session.tick(now);

    session.set_intent(MovementIntent::new(true, false, true, false));
    while !session.try_talk() {
        now += 1.0 / 60.0;
        session.tick(now);
        assert!(now < 5.0, "never reached Echo");
    }
    session.set_intent(MovementIntent::none());

    let player = session.player().bounds;
    let start = session.enemy().bounds.distance_to(&player);
    for _ in 0..(60 * 20) {
        now += 1.0 / 60.0;
        session.tick(now);
    }
    let end = session.enemy().bounds.distance_to(&player);
    assert!(end < start, "Wraith should close in ({} -> {})", start, end);
    assert!(end <= 50.0 + 1.0, "Wraith stops at the melee ring, got {}", end);
    assert!(end > 45.0, "Wraith should not close inside melee range, got {}", end);
}

#[test]
fn test_log_keeps_ten_most_recent() {
    let mut session = session_with_quest();
    for _ in 0..6 {
        session.try_engage();
        session.submit_answer("nope");
    }
    assert_eq!(session.log().len(), 10);
    assert_eq!(session.snapshot().log.len(), 10);
}

#[test]
fn test_disturbance_decays_over_time() {
    let mut session = session_with_quest();
    session.try_engage();
    session.submit_answer("nope");
    assert_eq!(session.camera_disturbance(), 5.0);

    let mut now = 0.0;
    for _ in 0..5 {
        now += 0.1;
        session.tick(now);
    }
    assert!((session.camera_disturbance() - 0.0).abs() < 1e-4);
    for _ in 0..5 {
        now += 0.1;
        session.tick(now);
    }
    assert_eq!(session.camera_disturbance(), 0.0);
}
