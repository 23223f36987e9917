//! Messages shown when there is neither a recommendation nor an outfit image.

use rand::{Rng, SeedableRng, rngs::StdRng};

pub const DEFAULT_MESSAGES: [&str; 8] = [
    "👕 Oops! No outfit suggestion available.",
    "🤷 Looks like we couldn’t pick an outfit this time.",
    "🎭 No recommendation? Time to mix & match your own style!",
    "💡 Your fashion instincts take the lead today!",
    "🚀 AI is taking a fashion break. Try again!",
    "🛌 No outfit picked—maybe today is a pajama day?",
    "❌ No outfit available",
    "🤔 no recommendation",
];

/// Chooses which default message to show.
pub trait MessagePicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MessagePicker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl MessagePicker for FixedPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

pub fn pick_default_message(picker: &mut impl MessagePicker) -> &'static str {
    let idx = picker.pick_index(DEFAULT_MESSAGES.len());
    DEFAULT_MESSAGES[idx.min(DEFAULT_MESSAGES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_picker_wraps() {
        assert_eq!(pick_default_message(&mut FixedPicker(0)), DEFAULT_MESSAGES[0]);
        assert_eq!(pick_default_message(&mut FixedPicker(9)), DEFAULT_MESSAGES[1]);
    }

    #[test]
    fn seeded_picker_is_reproducible() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        for _ in 0..16 {
            assert_eq!(pick_default_message(&mut a), pick_default_message(&mut b));
        }
    }

    #[test]
    fn random_picks_stay_in_the_fixed_set() {
        let mut picker = RandomPicker::from_entropy();
        for _ in 0..64 {
            let msg = pick_default_message(&mut picker);
            assert!(DEFAULT_MESSAGES.contains(&msg));
        }
    }

    #[test]
    fn messages_are_distinct_and_non_empty() {
        let mut seen = std::collections::HashSet::new();
        for msg in DEFAULT_MESSAGES {
            assert!(!msg.is_empty());
            assert!(seen.insert(msg));
        }
    }
}
