use super::effects::{Effect, Surface};
use smallvec::SmallVec;

// Inline capacity; a burst of key presses rarely keeps more effects alive.
const INLINE_EFFECTS: usize = 16;

/// Active effects owned by the render loop.
///
/// Effects are advanced once per `step` and swap-removed in the same step
/// they report inactive, so draw order is not stable across removals.
#[derive(Default)]
pub struct EffectArena {
    effects: SmallVec<[Effect; INLINE_EFFECTS]>,
}

impl EffectArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Advance and draw every effect once; returns how many finished.
    pub fn step(&mut self, surface: &mut dyn Surface) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.effects.len() {
            if self.effects[i].advance_and_render(surface) {
                i += 1;
            } else {
                // the swapped-in effect has not been advanced yet this step
                self.effects.swap_remove(i);
                removed += 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
