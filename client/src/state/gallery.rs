//! Project gallery filtering and the preview lightbox.
//!
//! Filtering animates: shown cards are put back in the layout and then faded
//! in with a per-card stagger, hidden cards fade out and leave the layout
//! once the fade ends. Every `apply` starts a new generation; deferred steps
//! carry the generation that scheduled them and are dropped if a newer filter
//! has been applied since.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

pub const ALL: &str = "all";
pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_STAGGER_MS: u32 = 100;
pub const HIDE_AFTER_MS: u32 = 300;
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const DEFAULT_ALT: &str = "Project preview";

/// Shown in the lightbox for cards without an image.
pub const PLACEHOLDER_IMAGE: &str = concat!(
    "data:image/svg+xml;charset=utf-8,",
    "%3Csvg width='400' height='300' xmlns='http://www.w3.org/2000/svg'%3E",
    "%3Crect width='400' height='300' fill='%230f2a38'/%3E",
    "%3Ctext x='200' y='150' font-family='Arial, sans-serif' font-size='14' ",
    "fill='%23bfcbd6' text-anchor='middle' dy='.3em'%3EProject Preview%3C/text%3E",
    "%3C/svg%3E",
);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Filter named by a control's `data-filter`; missing means all.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL) => Self::All,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    #[must_use]
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == *category,
        }
    }
}

/// A project card as read from the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub category: String,
}

impl GalleryItem {
    /// Card with the category from `data-type`; missing means `all`.
    #[must_use]
    pub fn new(category: Option<&str>) -> Self {
        Self { category: category.unwrap_or(ALL).to_owned() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTransition {
    /// Restore layout now, fade in after `delay_ms`.
    Show { index: usize, delay_ms: u32, generation: u64 },
    /// Fade out now, drop from layout after `remove_after_ms`.
    Hide { index: usize, remove_after_ms: u32, generation: u64 },
}

impl CardTransition {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Show { index, .. } | Self::Hide { index, .. } => index,
        }
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        match self {
            Self::Show { generation, .. } | Self::Hide { generation, .. } => generation,
        }
    }
}

#[derive(Debug, Default)]
pub struct GalleryFilter {
    generation: u64,
}

impl GalleryFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, cards: &[GalleryItem], filter: &Filter) -> Vec<CardTransition> {
        self.generation += 1;
        let generation = self.generation;
        cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if filter.matches(card) {
                    CardTransition::Show {
                        index,
                        delay_ms: u32::try_from(index)
                            .unwrap_or(u32::MAX)
                            .saturating_mul(SHOW_STAGGER_MS),
                        generation,
                    }
                } else {
                    CardTransition::Hide { index, remove_after_ms: HIDE_AFTER_MS, generation }
                }
            })
            .collect()
    }

    /// Whether a deferred step scheduled under `generation` should still run.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Image and alt text for the lightbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxView {
    pub src: String,
    pub alt: String,
}

impl LightboxView {
    #[must_use]
    pub fn for_card(image_src: Option<&str>, title: Option<&str>) -> Self {
        Self {
            src: image_src.unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
            alt: title.unwrap_or(DEFAULT_ALT).to_owned(),
        }
    }
}
