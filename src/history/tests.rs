use super::*;
use crate::preprocessing::{Level, Subject};
use tempfile::TempDir;

fn turn(n: usize) -> ConversationTurn {
    ConversationTurn::new(&format!("question {}", n), &format!("answer {}", n))
}

#[test]
fn log_evicts_oldest_at_capacity() {
    let mut log = ConversationLog::default();
    let turns: Vec<_> = (1..=51).map(turn).collect();
    for t in &turns {
        log.push(t.clone());
    }

    assert_eq!(log.len(), 50);
    let kept = log.to_vec();
    assert_eq!(kept[0].user_text, "question 2");
    assert_eq!(kept, turns[1..].to_vec());
}

#[test]
fn from_turns_keeps_newest() {
    let log = ConversationLog::from_turns((1..=5).map(turn).collect(), 3);
    let texts: Vec<_> = log.iter().map(|t| t.user_text.as_str()).collect();
    assert_eq!(texts, ["question 3", "question 4", "question 5"]);
}

#[test]
fn context_window_uses_last_three_turns() {
    let mut log = ConversationLog::default();
    assert_eq!(log.context_window(), "");

    for n in 1..=4 {
        log.record(&format!("q{}", n), &"a".repeat(150));
    }
    let context = log.context_window();
    assert!(context.starts_with("Recent conversation context: [1] User: q2 | Assistant: "));
    assert!(context.contains("[3] User: q4"));
    assert!(!context.contains("q1"));
    assert!(context.contains(&format!("{}...", "a".repeat(100))));
    assert!(!context.contains(&"a".repeat(101)));
}

#[test]
fn turn_infers_subject_and_level() {
    let t = ConversationTurn::new("advanced calculus", "ok");
    assert_eq!(t.subject, Subject::Mathematics);
    assert_eq!(t.level, Level::Advanced);
}

#[test]
fn user_context_tracks_recent_topics() {
    let mut ctx = UserContext::default();
    ctx.observe(Subject::Science, Level::Beginner, 5);
    ctx.observe(Subject::General, Level::Advanced, 5);

    assert_eq!(ctx.current_subject, Some(Subject::Science));
    assert_eq!(ctx.learning_level, Level::Advanced);
    assert_eq!(ctx.recent_topics, vec![Subject::General, Subject::Science]);

    for _ in 0..10 {
        ctx.observe(Subject::History, Level::Intermediate, 5);
    }
    assert_eq!(ctx.recent_topics.len(), 5);
    assert!(ctx.recent_topics.iter().all(|s| *s == Subject::History));
}

#[test]
fn merge_only_touches_given_fields() {
    let mut ctx = UserContext::default();
    ctx.observe(Subject::Arts, Level::Beginner, 5);
    ctx.merge(ContextUpdate {
        interests: Some(vec!["painting".into()]),
        ..Default::default()
    });

    assert_eq!(ctx.current_subject, Some(Subject::Arts));
    assert_eq!(ctx.learning_level, Level::Beginner);
    assert_eq!(ctx.interests, vec!["painting".to_string()]);
}

#[test]
fn snapshot_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(dir.path().join("state"));
    let turns: Vec<_> = (1..=3).map(turn).collect();

    store.save(HISTORY_KEY, &turns).unwrap();
    assert!(dir.path().join("state/chatbot_history.json").exists());

    let loaded: Vec<ConversationTurn> = store.load(HISTORY_KEY);
    assert_eq!(loaded, turns);
}

#[test]
fn missing_or_corrupt_snapshot_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(dir.path());

    let missing: Vec<ConversationTurn> = store.load(HISTORY_KEY);
    assert!(missing.is_empty());

    std::fs::write(dir.path().join("chatbot_history.json"), "{not json").unwrap();
    let corrupt: Vec<ConversationTurn> = store.load(HISTORY_KEY);
    assert!(corrupt.is_empty());
}
