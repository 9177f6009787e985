use super::*;

/// Step `n` ticks from `state`, collecting each tick's output.
fn run(mut state: TypingState, phrases: &[&str], n: usize) -> (TypingState, Vec<Tick>) {
    let mut ticks = Vec::with_capacity(n);
    for _ in 0..n {
        let (next, tick) = state.tick(phrases);
        state = next;
        ticks.push(tick);
    }
    (state, ticks)
}

#[test]
fn types_one_character_per_tick() {
    let (_, ticks) = run(TypingState::default(), &["abc"], 2);
    assert_eq!(ticks[0], Tick { text: "a".into(), delay_ms: TYPE_DELAY_MS });
    assert_eq!(ticks[1], Tick { text: "ab".into(), delay_ms: TYPE_DELAY_MS });
}

#[test]
fn full_phrase_dwells_then_deletes() {
    let (state, ticks) = run(TypingState::default(), &["abc"], 3);
    assert_eq!(ticks[2], Tick { text: "abc".into(), delay_ms: FULL_PAUSE_MS });
    assert!(state.deleting);

    let (state, ticks) = run(state, &["abc"], 1);
    assert_eq!(ticks[0], Tick { text: "ab".into(), delay_ms: DELETE_DELAY_MS });
    assert!(state.deleting);
}

#[test]
fn empty_text_dwells_then_advances_phrase() {
    let phrases = ["ab", "xy"];
    // 2 typing ticks + 2 deleting ticks.
    let (state, ticks) = run(TypingState::default(), &phrases, 4);
    assert_eq!(ticks[3], Tick { text: String::new(), delay_ms: EMPTY_PAUSE_MS });
    assert_eq!(state.phrase_index, 1);
    assert!(!state.deleting);

    let (_, ticks) = run(state, &phrases, 1);
    assert_eq!(ticks[0].text, "x");
}

#[test]
fn wraps_after_last_phrase() {
    let phrases = ["a", "b"];
    // Each single-char phrase takes one typing and one deleting tick.
    let (state, _) = run(TypingState::default(), &phrases, 4);
    assert_eq!(state.phrase_index, 0);
    let (_, ticks) = run(state, &phrases, 1);
    assert_eq!(ticks[0].text, "a");
}

#[test]
fn out_of_range_index_wraps() {
    let state = TypingState { phrase_index: 7, char_count: 0, deleting: false };
    let (_, tick) = state.tick(&["one", "two"]);
    assert_eq!(tick.text, "t");
}

#[test]
fn counts_characters_not_bytes() {
    let (_, ticks) = run(TypingState::default(), &["héllo"], 2);
    assert_eq!(ticks[1].text, "hé");
}

#[test]
fn empty_phrase_is_skipped() {
    let (state, tick) = TypingState::default().tick(&["", "ok"]);
    assert_eq!(tick, Tick { text: String::new(), delay_ms: EMPTY_PAUSE_MS });
    assert_eq!(state.phrase_index, 1);
}

#[test]
fn no_phrases_yields_empty_text_forever() {
    let (_, ticks) = run(TypingState::default(), &[], 3);
    assert!(ticks.iter().all(|t| t.text.is_empty()));
}

#[test]
fn full_cycle_of_default_phrases_returns_to_start() {
    let ticks_per_phrase: usize = PHRASES.iter().map(|p| 2 * p.chars().count()).sum();
    let (state, _) = run(TypingState::default(), PHRASES, ticks_per_phrase);
    assert_eq!(state, TypingState::default());
}
