use super::arena::EffectArena;
use super::constants::WASH_STYLE;
use super::effects::{Effect, Surface};
use super::keymap::{KeyMap, NoteIndex};
use fnv::FnvHashSet;
use rand::prelude::*;
use std::rc::Rc;

/// Audio sink for note samples. Playback is fire-and-forget: implementations
/// report their own failures.
pub trait SamplePlayer {
    fn play(&mut self, sample: &str);
}

/// Music pad state: the key table, the active effects and per-button jump flags.
///
/// Typical usage:
/// - Construct once with the shared `KeyMap`
/// - Call `press_key` / `trigger` from input handlers
/// - Call `render_frame` once per display refresh
pub struct NotePad {
    keymap: Rc<KeyMap>,
    arena: EffectArena,
    jumping: FnvHashSet<NoteIndex>,
    rng: StdRng,
}

impl NotePad {
    /// `seed` makes effect randomness reproducible; `None` seeds from the platform.
    pub fn new(keymap: Rc<KeyMap>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(keymap, rng)
    }

    pub fn with_rng(keymap: Rc<KeyMap>, rng: StdRng) -> Self {
        Self {
            keymap,
            arena: EffectArena::new(),
            jumping: FnvHashSet::default(),
            rng,
        }
    }

    pub fn keymap(&self) -> &Rc<KeyMap> {
        &self.keymap
    }

    pub fn effects(&self) -> &EffectArena {
        &self.arena
    }

    /// Play note `index`: flag its button, play its sample once and spawn
    /// its effect. Returns false for an unknown index.
    pub fn trigger(&mut self, index: NoteIndex, player: &mut dyn SamplePlayer) -> bool {
        let Some(config) = self.keymap.by_index(index).copied() else {
            log::warn!("[pad] no note at index {}", index);
            return false;
        };
        self.jumping.insert(config.index);
        player.play(&config.sample_name());
        if let Some(desc) = &config.effect {
            self.arena
                .push(Effect::spawn(desc, config.sprite, &mut self.rng));
        }
        log::debug!(
            "[pad] note {} sprite={:?} active={}",
            config.index,
            config.sprite,
            self.arena.len()
        );
        true
    }

    /// Trigger the note bound to a `KeyboardEvent.key` value, if any.
    pub fn press_key(&mut self, key: &str, player: &mut dyn SamplePlayer) -> Option<NoteIndex> {
        let index = self.keymap.lookup_key(key)?.index;
        self.trigger(index, player).then_some(index)
    }

    pub fn is_jumping(&self, index: NoteIndex) -> bool {
        self.jumping.contains(&index)
    }

    /// Clear the jump flag once the button animation has finished.
    pub fn clear_jump(&mut self, index: NoteIndex) {
        self.jumping.remove(&index);
    }

    /// One display refresh: fade the surface, then advance every effect and
    /// drop the ones that finished. Returns how many finished.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) -> usize {
        surface.wash(WASH_STYLE);
        self.arena.step(surface)
    }
}
