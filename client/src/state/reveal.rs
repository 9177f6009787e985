//! Scroll-driven reveal: which effects fire when an observed region enters
//! the viewport.
//!
//! Section ids double as navigation anchors, so entering `#about` both
//! highlights the `#about` link and (once) starts the about counters.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

use super::tween::Tween;

/// `IntersectionObserver` threshold for reveal targets.
pub const THRESHOLD: f64 = 0.1;
/// `IntersectionObserver` root margin for reveal targets.
pub const ROOT_MARGIN: &str = "-50px";
/// Class added to a region once it has been seen.
pub const INVIEW_CLASS: &str = "inview";

pub const SKILLS_SECTION: &str = "skills";
pub const ABOUT_SECTION: &str = "about";

pub const CARD_STAGGER_MS: u32 = 100;
pub const PLAN_STAGGER_MS: u32 = 200;
pub const PROGRESS_DURATION_MS: f64 = 1500.0;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Keys that have already fired. Inserting is the only operation; a key that
/// fired once never fires again.
#[derive(Debug)]
pub struct OnceSet<K> {
    fired: BTreeSet<K>,
}

impl<K: Ord> Default for OnceSet<K> {
    fn default() -> Self {
        Self { fired: BTreeSet::new() }
    }
}

impl<K: Ord> OnceSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time `key` is seen, false afterwards.
    pub fn first(&mut self, key: K) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }
}

/// One-shot page features triggered by scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OneShot {
    Progress,
    Counters,
}

/// What the observer knows about an entering element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub id: Option<String>,
    /// Position among its siblings when the element is a project card.
    pub project_card_index: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    MarkRevealed,
    ActivateNav(String),
    AnimateProgress,
    AnimateCounters,
    StaggerCard { delay_ms: u32 },
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    once: OnceSet<OneShot>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects for `region` entering the viewport, in application order.
    pub fn on_enter(&mut self, region: &Region) -> Vec<RevealEffect> {
        let mut effects = vec![RevealEffect::MarkRevealed];

        if let Some(id) = region.id.as_deref().filter(|id| !id.is_empty()) {
            effects.push(RevealEffect::ActivateNav(id.to_owned()));
            if id == SKILLS_SECTION && self.once.first(OneShot::Progress) {
                effects.push(RevealEffect::AnimateProgress);
            }
            if id == ABOUT_SECTION && self.once.first(OneShot::Counters) {
                effects.push(RevealEffect::AnimateCounters);
            }
        }

        if let Some(index) = region.project_card_index {
            effects.push(RevealEffect::StaggerCard {
                delay_ms: stagger(index, CARD_STAGGER_MS),
            });
        }
        effects
    }
}

/// Skill bar fill: width to apply and the percentage label tween.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressStep {
    pub index: usize,
    pub delay_ms: u32,
    pub width: String,
    pub label: Tween,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterStep {
    pub index: usize,
    pub delay_ms: u32,
    pub tween: Tween,
}

#[must_use]
pub fn progress_plan(values: &[i64]) -> Vec<ProgressStep> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            #[allow(clippy::cast_precision_loss)]
            let end = value as f64;
            ProgressStep {
                index,
                delay_ms: stagger(index, PLAN_STAGGER_MS),
                width: format!("{value}%"),
                label: Tween::new(0.0, end, PROGRESS_DURATION_MS, "%"),
            }
        })
        .collect()
}

#[must_use]
pub fn counter_plan(targets: &[f64]) -> Vec<CounterStep> {
    targets
        .iter()
        .enumerate()
        .map(|(index, &target)| CounterStep {
            index,
            delay_ms: stagger(index, PLAN_STAGGER_MS),
            tween: Tween::new(0.0, target, COUNTER_DURATION_MS, ""),
        })
        .collect()
}

fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Leading integer of `raw` (`"85%"` -> 85); 0 when there is none.
#[must_use]
pub fn parse_int_attr(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

/// Leading decimal number of `raw`, exponent included (`"4.5 years"` -> 4.5,
/// `"1e3"` -> 1000); 0 when there is none.
#[must_use]
pub fn parse_float_attr(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(bytes.get(end), Some(b'-' | b'+')) {
            end += 1;
        }
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    // Shrink until the prefix parses ("1." and "-" alone are not numbers).
    while end > 0 {
        if let Ok(n) = s[..end].parse::<f64>() {
            return n;
        }
        end -= 1;
    }
    0.0
}
