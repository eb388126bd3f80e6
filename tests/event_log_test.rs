use memory_match::core::Session;
use memory_match::event_log::{EventLog, EventRecord};
use memory_match::types::{Difficulty, GameEvent};

#[test]
fn session_events_round_trip_through_the_log() {
    let mut session = Session::new(11);
    session.choose_difficulty(Difficulty::Easy).unwrap();
    session.choose_category("sweets").unwrap();
    session.select_card(0);

    let events = session.take_events();
    let mut log = EventLog::new(Vec::new());
    log.record_all(125, session.generation(), &events);

    let out = String::from_utf8(log.into_inner()).unwrap();
    let records: Vec<EventRecord> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), events.len());
    assert!(records.iter().all(|r| r.ts_ms == 125));
    assert!(matches!(
        &records[0].event,
        GameEvent::BoardReady { difficulty: Difficulty::Easy, category, pairs }
            if category == "sweets" && pairs.len() == 16
    ));
    assert_eq!(
        records.last().map(|r| &r.event),
        Some(&GameEvent::CardRevealed { card: 0 })
    );
}

#[test]
fn log_file_is_appended() {
    let path = std::env::temp_dir().join(format!("memory-match-log-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    for ts in [1u64, 2] {
        let mut log = EventLog::open(&path).unwrap();
        log.record(ts, 0, &GameEvent::SessionReset);
        log.flush();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.starts_with(r#"{"ts_ms":1,"generation":0,"event":{"type":"session_reset"}}"#));
}
