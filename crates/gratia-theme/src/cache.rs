//! Memoized palettes for one tone.

use std::collections::HashMap;

use crate::mood::Mood;
use crate::palette::Palette;
use crate::tone::Tone;

/// Caller-owned memo of derived palettes, keyed by mood.
///
/// Derivation is pure, so a cached palette is identical to a fresh one.
/// The cache is bound to a single tone; changing the tone means a new cache.
#[derive(Debug, Clone)]
pub struct PaletteCache {
    tone: Tone,
    palettes: HashMap<Mood, Palette>,
}

impl PaletteCache {
    #[must_use]
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            palettes: HashMap::with_capacity(Mood::ALL.len()),
        }
    }

    #[must_use]
    pub const fn tone(&self) -> &Tone {
        &self.tone
    }

    /// The palette for `mood`, deriving it on first request.
    pub fn get(&mut self, mood: Mood) -> &Palette {
        let tone = &self.tone;
        self.palettes
            .entry(mood)
            .or_insert_with(|| Palette::for_mood(tone, mood))
    }

    /// Number of palettes derived so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
