//! Animation and sprite-sheet assembly
//!
//! Pure aggregation: frames are bundled with a per-frame duration into an
//! [`Animation`], and animations are grouped into sheets. Invariant
//! violations (empty animation, zero duration, mixed frame sizes) are
//! programming errors and panic at construction rather than at render time.

use crate::frame::Frame;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An ordered, timed frame sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<Frame>,
    frame_duration_ms: u32,
}

impl Animation {
    /// Bundle frames with a uniform per-frame duration.
    ///
    /// # Panics
    ///
    /// If `frames` is empty, `frame_duration_ms` is zero, or the frames do
    /// not all share the same dimensions.
    pub fn new(frames: Vec<Frame>, frame_duration_ms: u32) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        assert!(frame_duration_ms > 0, "frame duration must be positive");
        let dims = frames[0].dimensions();
        assert!(
            frames.iter().all(|f| f.dimensions() == dims),
            "all frames of an animation must be {}x{}",
            dims.0,
            dims.1
        );
        Self {
            frames,
            frame_duration_ms,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_duration_ms(&self) -> u32 {
        self.frame_duration_ms
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Dimensions shared by every frame.
    pub fn frame_dimensions(&self) -> (usize, usize) {
        self.frames[0].dimensions()
    }

    /// Duration of one full loop.
    pub fn total_duration_ms(&self) -> u64 {
        u64::from(self.frame_duration_ms) * self.frames.len() as u64
    }

    /// Index of the frame shown `elapsed_ms` after playback started, looping.
    pub fn frame_index_at(&self, elapsed_ms: u64) -> usize {
        let step = elapsed_ms / u64::from(self.frame_duration_ms);
        (step % self.frames.len() as u64) as usize
    }

    /// Frame shown `elapsed_ms` after playback started, looping.
    pub fn frame_at(&self, elapsed_ms: u64) -> &Frame {
        &self.frames[self.frame_index_at(elapsed_ms)]
    }
}

/// The eight actions every character sheet provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
    Special,
    Hit,
    Ko,
}

impl Action {
    /// All actions in canonical order.
    pub const ALL: [Action; 8] = [
        Action::Idle,
        Action::Run,
        Action::Jump,
        Action::Fall,
        Action::Attack,
        Action::Special,
        Action::Hit,
        Action::Ko,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Run => "run",
            Action::Jump => "jump",
            Action::Fall => "fall",
            Action::Attack => "attack",
            Action::Special => "special",
            Action::Hit => "hit",
            Action::Ko => "ko",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Action::ALL
            .into_iter()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = Action::ALL.iter().map(|a| a.name()).collect();
                format!("unknown action '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// All animations of one fighter, one per [`Action`].
///
/// One field per action: a sheet missing an action does not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSpriteSheet {
    pub name: &'static str,
    pub idle: Animation,
    pub run: Animation,
    pub jump: Animation,
    pub fall: Animation,
    pub attack: Animation,
    pub special: Animation,
    pub hit: Animation,
    pub ko: Animation,
}

impl CharacterSpriteSheet {
    pub fn get(&self, action: Action) -> &Animation {
        match action {
            Action::Idle => &self.idle,
            Action::Run => &self.run,
            Action::Jump => &self.jump,
            Action::Fall => &self.fall,
            Action::Attack => &self.attack,
            Action::Special => &self.special,
            Action::Hit => &self.hit,
            Action::Ko => &self.ko,
        }
    }

    /// `(action, animation)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, &Animation)> {
        Action::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Total number of frames across all actions.
    pub fn frame_count(&self) -> usize {
        self.iter().map(|(_, anim)| anim.len()).sum()
    }
}

/// A named technique or hit effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSpriteSheet {
    pub name: &'static str,
    pub animation: Animation,
}

impl EffectSpriteSheet {
    pub fn new(name: &'static str, animation: Animation) -> Self {
        Self { name, animation }
    }
}
