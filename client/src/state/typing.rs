//! Typewriter effect for the hero headline.
//!
//! The effect is a pure transition: given the current state it returns the
//! next state, the text to display, and how long to wait before the next
//! tick. The browser layer only schedules ticks.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

pub const PHRASES: &[&str] = &[
    "Frontend Developer",
    "DSA with Java",
    "AR/VR Explorer",
    "React & UI Enthusiast",
    "Problem Solver",
    "Creative Thinker",
];

/// Delay between typed characters.
pub const TYPE_DELAY_MS: u32 = 100;
/// Delay between deleted characters.
pub const DELETE_DELAY_MS: u32 = 50;
/// Dwell once a phrase is fully typed.
pub const FULL_PAUSE_MS: u32 = 1200;
/// Dwell once a phrase is fully deleted, before the next one starts.
pub const EMPTY_PAUSE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Visible prefix length, in characters.
    pub char_count: usize,
    pub deleting: bool,
}

/// Output of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
}

impl TypingState {
    /// Advance one character (typing or deleting) and report what to show.
    #[must_use]
    pub fn tick(self, phrases: &[&str]) -> (Self, Tick) {
        if phrases.is_empty() {
            return (self, Tick { text: String::new(), delay_ms: EMPTY_PAUSE_MS });
        }

        let phrase = phrases[self.phrase_index % phrases.len()];
        let len = phrase.chars().count();
        let mut next = self;

        if self.deleting {
            next.char_count = self.char_count.min(len).saturating_sub(1);
            let text = prefix(phrase, next.char_count);
            if next.char_count == 0 {
                next.deleting = false;
                next.phrase_index = (self.phrase_index + 1) % phrases.len();
                return (next, Tick { text, delay_ms: EMPTY_PAUSE_MS });
            }
            return (next, Tick { text, delay_ms: DELETE_DELAY_MS });
        }

        if len == 0 {
            next.char_count = 0;
            next.phrase_index = (self.phrase_index + 1) % phrases.len();
            return (next, Tick { text: String::new(), delay_ms: EMPTY_PAUSE_MS });
        }

        next.char_count = (self.char_count + 1).min(len);
        let text = prefix(phrase, next.char_count);
        if next.char_count == len {
            next.deleting = true;
            return (next, Tick { text, delay_ms: FULL_PAUSE_MS });
        }
        (next, Tick { text, delay_ms: TYPE_DELAY_MS })
    }
}

fn prefix(phrase: &str, chars: usize) -> String {
    phrase.chars().take(chars).collect()
}
