use super::constants::*;
use super::effects::*;
use fnv::FnvHashMap;

/// Index of a pad note, 0..32. Also names the note's audio sample.
pub type NoteIndex = usize;

/// Keyboard symbols in note order, four rows of eight.
pub const TRIGGER_SYMBOLS: [char; NOTE_COUNT] = [
    '1', '2', '3', '4', '7', '8', '9', '0', //
    'q', 'w', 'e', 'r', 'u', 'i', 'o', 'p', //
    'a', 's', 'd', 'f', 'j', 'k', 'l', ';', //
    'z', 'x', 'c', 'v', 'm', ',', '.', '/',
];

/// Effect for each column of the pad; every row shares the same column layout.
pub const COLUMN_EFFECTS: [EffectDescriptor; NOTES_PER_ROW] = [
    // pinwheel
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.5,
        duration_sec: 1.0,
        position: PositionKind::Anchored,
        rotation: RotationKind::Spin,
        scale: ScaleKind::Pulse,
        opacity: OpacityKind::Opaque,
        filter: FilterKind::Tinted,
    }),
    EffectDescriptor::Slide,
    // scatter
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.1,
        duration_sec: 1.0,
        position: PositionKind::Scatter,
        rotation: RotationKind::Drift,
        scale: ScaleKind::Pulse,
        opacity: OpacityKind::Opaque,
        filter: FilterKind::Tinted,
    }),
    // pop
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.2,
        duration_sec: 1.0,
        position: PositionKind::Overshoot,
        rotation: RotationKind::Jitter {
            min: -170.0,
            max: -50.0,
        },
        scale: ScaleKind::Pulse,
        opacity: OpacityKind::Opaque,
        filter: FilterKind::Tinted,
    }),
    // pop and fade
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.2,
        duration_sec: 1.0,
        position: PositionKind::Overshoot,
        rotation: RotationKind::Jitter {
            min: -60.0,
            max: 30.0,
        },
        scale: ScaleKind::Pulse,
        opacity: OpacityKind::FadeHalf,
        filter: FilterKind::Tinted,
    }),
    // launch
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.2,
        duration_sec: 5.0,
        position: PositionKind::Launch,
        rotation: RotationKind::Still,
        scale: ScaleKind::Pulse,
        opacity: OpacityKind::FadeHalf,
        filter: FilterKind::Vivid {
            sepia_max: 0.0,
            hue_range: 90.0,
        },
    }),
    // sweep
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.4,
        duration_sec: 5.0,
        position: PositionKind::Sweep {
            lane_min: 0.0,
            lane_max: 1.0,
        },
        rotation: RotationKind::Still,
        scale: ScaleKind::Pulse,
        opacity: OpacityKind::FadeHalf,
        filter: FilterKind::Vivid {
            sepia_max: 0.0,
            hue_range: 90.0,
        },
    }),
    // parade
    EffectDescriptor::Motion(MotionDescriptor {
        frequency: 0.3,
        duration_sec: 5.0,
        position: PositionKind::Sweep {
            lane_min: 0.4,
            lane_max: 0.6,
        },
        rotation: RotationKind::Wobble,
        scale: ScaleKind::Fixed(6.0),
        opacity: OpacityKind::FadeHalf,
        filter: FilterKind::Vivid {
            sepia_max: 0.3,
            hue_range: 40.0,
        },
    }),
];

/// Static configuration for one pad note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyConfig {
    pub index: NoteIndex,
    pub symbol: Option<char>,
    pub sprite: Sprite,
    pub effect: Option<EffectDescriptor>,
}

impl KeyConfig {
    pub fn sample_name(&self) -> String {
        sample_name(self.index)
    }
}

#[inline]
pub fn sample_name(index: NoteIndex) -> String {
    format!("{}.mp3", index)
}

/// Percentage placement of a pad button relative to the pad center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub fn button_placement(index: NoteIndex) -> ButtonPlacement {
    ButtonPlacement {
        x: PAD_BUTTON_X[index % NOTES_PER_ROW],
        y: PAD_BUTTON_Y[(index / NOTES_PER_ROW).min(PAD_BUTTON_Y.len() - 1)],
        width: PAD_BUTTON_WIDTH,
        height: PAD_BUTTON_HEIGHT,
    }
}

/// Immutable lookup from trigger symbol or note index to `KeyConfig`.
///
/// Built once at startup and shared with the components that trigger notes.
#[derive(Clone, Debug)]
pub struct KeyMap {
    configs: Vec<KeyConfig>,
    by_symbol: FnvHashMap<char, NoteIndex>,
}

impl KeyMap {
    pub fn new(configs: Vec<KeyConfig>) -> Self {
        let by_symbol = configs
            .iter()
            .filter_map(|c| c.symbol.map(|s| (s, c.index)))
            .collect();
        Self { configs, by_symbol }
    }

    /// The 4×8 pad: one sprite per row, one effect per column.
    pub fn standard() -> Self {
        let configs = TRIGGER_SYMBOLS
            .iter()
            .enumerate()
            .map(|(index, &symbol)| KeyConfig {
                index,
                symbol: Some(symbol),
                sprite: Sprite::for_note(index),
                effect: Some(COLUMN_EFFECTS[index % NOTES_PER_ROW]),
            })
            .collect();
        Self::new(configs)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn configs(&self) -> &[KeyConfig] {
        &self.configs
    }

    pub fn by_index(&self, index: NoteIndex) -> Option<&KeyConfig> {
        self.configs.iter().find(|c| c.index == index)
    }

    /// Look up a `KeyboardEvent.key` value. Case-insensitive; multi-character
    /// keys ("Enter", "ArrowUp", ...) never match.
    pub fn lookup_key(&self, key: &str) -> Option<&KeyConfig> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let symbol = c.to_lowercase().next()?;
        let index = *self.by_symbol.get(&symbol)?;
        self.by_index(index)
    }
}
