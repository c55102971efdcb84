//! Pose-to-frame generation for the fighter archetypes
//!
//! Both archetypes paint with the same pipeline ([`draw_pose`]): head, torso,
//! arms, legs, optional effects, then a silhouette outline. The [`Fighter`]
//! trait supplies what differs between them: palette, body proportions, and
//! which extras they know how to paint.
//!
//! Two offsets move the figure as a whole. `lean` (from the torso lean)
//! shifts the torso horizontally; `head` (from the head tilt) shifts head,
//! torso and limbs vertically. Limbs do not follow the lean.

pub mod brawler;
pub mod duelist;

use crate::animation::{Action, Animation, CharacterSpriteSheet};
use crate::color::Color;
use crate::draw::{compute_outline, fill_rect, set_pixel, snap};
use crate::frame::{Frame, FrameClass};
use crate::pose::{ArmPosition, LegPosition, PoseConfig, Side};
use lazy_static::lazy_static;
use std::fmt;
use std::str::FromStr;

pub use brawler::Brawler;
pub use duelist::Duelist;

/// Aura rings are centered here, shifted down by the head offset.
const AURA_CENTER: (f64, f64) = (11.0, 17.0);

/// Ring radii, innermost first.
const AURA_BASE_RADIUS: i32 = 6;

/// Opacity tiers of the three aura rings, innermost first.
const AURA_TIERS: [u8; 3] = [45, 30, 15];

/// Colors shared by every archetype's head and extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FighterPalette {
    pub outline: Color,
    pub hair: Color,
    pub skin: Color,
    pub eye: Color,
    /// Forehead stripe; falls back to hair when absent.
    pub headband: Option<Color>,
    /// Color of the chakra-burst dashes.
    pub burst: Color,
    /// RGB of the special-aura rings.
    pub aura: [u8; 3],
}

/// Per-archetype painting hooks.
pub trait Fighter {
    /// Sheet name, also used in output file names.
    fn name(&self) -> &'static str;

    fn palette(&self) -> &FighterPalette;

    /// Angle between aura samples, in degrees.
    fn aura_step_degrees(&self) -> usize;

    fn paint_torso(&self, frame: &mut Frame, lean: i32, head: i32);

    fn paint_arm(&self, frame: &mut Frame, side: Side, position: ArmPosition, head: i32);

    fn paint_leg(&self, frame: &mut Frame, side: Side, position: LegPosition, head: i32);

    /// Paint a held weapon. Returns false when the archetype has none to draw.
    fn paint_weapon(&self, frame: &mut Frame, pose: &PoseConfig, head: i32) -> bool {
        let _ = (frame, pose, head);
        false
    }

    /// The pose table for one action, in playback order.
    fn poses(&self, action: Action) -> &'static [PoseConfig];

    /// Per-frame duration of one action.
    fn frame_duration_ms(&self, action: Action) -> u32;
}

/// Paint one outlined character frame for `pose`.
///
/// Deterministic: equal poses give identical frames.
pub fn draw_pose<F: Fighter + ?Sized>(fighter: &F, pose: &PoseConfig) -> Frame {
    let mut frame = Frame::blank(FrameClass::Character);
    let lean = pose.torso_lean.offset();
    let head = pose.head_tilt;
    let palette = fighter.palette();

    paint_head(&mut frame, palette, head);
    fighter.paint_torso(&mut frame, lean, head);

    for side in [Side::Left, Side::Right] {
        fighter.paint_arm(&mut frame, side, pose.arm(side), head);
    }
    for side in [Side::Left, Side::Right] {
        fighter.paint_leg(&mut frame, side, pose.leg(side), head);
    }

    if pose.chakra_burst {
        paint_chakra_burst(&mut frame, palette.burst, head);
    }
    if pose.weapon.is_some() && !fighter.paint_weapon(&mut frame, pose, head) {
        log::warn!("{} has no weapon sprite, ignoring {:?}", fighter.name(), pose.weapon);
    }
    if pose.special_aura {
        paint_aura(&mut frame, palette.aura, fighter.aura_step_degrees(), head);
    }

    compute_outline(&frame, palette.outline)
}

/// Build a fighter's full sheet from its pose tables.
pub fn build_sheet<F: Fighter + ?Sized>(fighter: &F) -> CharacterSpriteSheet {
    let animation = |action: Action| {
        let frames = fighter
            .poses(action)
            .iter()
            .map(|pose| draw_pose(fighter, pose))
            .collect();
        Animation::new(frames, fighter.frame_duration_ms(action))
    };

    let sheet = CharacterSpriteSheet {
        name: fighter.name(),
        idle: animation(Action::Idle),
        run: animation(Action::Run),
        jump: animation(Action::Jump),
        fall: animation(Action::Fall),
        attack: animation(Action::Attack),
        special: animation(Action::Special),
        hit: animation(Action::Hit),
        ko: animation(Action::Ko),
    };
    log::debug!("built '{}' sheet ({} frames)", sheet.name, sheet.frame_count());
    sheet
}

/// Hair, headband, face, eyes and mouth.
fn paint_head(frame: &mut Frame, palette: &FighterPalette, head: i32) {
    fill_rect(frame, 8, 2 + head, 8, 2, palette.hair);
    fill_rect(frame, 7, 3 + head, 10, 3, palette.hair);
    fill_rect(frame, 8, 5 + head, 8, 1, palette.headband.unwrap_or(palette.hair));
    fill_rect(frame, 9, 6 + head, 6, 5, palette.skin);
    set_pixel(frame, 10, 8 + head, palette.eye);
    set_pixel(frame, 13, 8 + head, palette.eye);
    set_pixel(frame, 11, 11 + head, palette.eye);
}

/// A dashed row of chakra sparks just above the torso.
fn paint_chakra_burst(frame: &mut Frame, color: Color, head: i32) {
    for i in 0..8 {
        set_pixel(frame, 6 + i * 2, 10 + head + (i % 2), color);
    }
}

/// Three concentric rings of decreasing opacity around the torso.
fn paint_aura(frame: &mut Frame, rgb: [u8; 3], step_degrees: usize, head: i32) {
    let [r, g, b] = rgb;
    let (cx, cy) = AURA_CENTER;
    for (ring, tier) in AURA_TIERS.into_iter().enumerate() {
        let color = Color::rgba(r, g, b, tier);
        let radius = f64::from(AURA_BASE_RADIUS + ring as i32);
        for degrees in (0..360).step_by(step_degrees) {
            let rad = (degrees as f64).to_radians();
            let x = snap(cx + rad.cos() * radius);
            let y = snap(cy + f64::from(head) + rad.sin() * radius);
            set_pixel(frame, x, y, color);
        }
    }
}

/// The two playable archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Brawler,
    Duelist,
}

impl Archetype {
    pub const ALL: [Archetype; 2] = [Archetype::Brawler, Archetype::Duelist];

    pub fn fighter(self) -> &'static dyn Fighter {
        match self {
            Archetype::Brawler => &Brawler,
            Archetype::Duelist => &Duelist,
        }
    }

    pub fn name(self) -> &'static str {
        self.fighter().name()
    }

    /// Paint a single pose for this archetype.
    pub fn draw_pose(self, pose: &PoseConfig) -> Frame {
        draw_pose(self.fighter(), pose)
    }

    /// The shared, lazily built sheet.
    pub fn sheet(self) -> &'static CharacterSpriteSheet {
        match self {
            Archetype::Brawler => &BRAWLER_SHEET,
            Archetype::Duelist => &DUELIST_SHEET,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Archetype::ALL
            .into_iter()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| format!("unknown character '{}'", s))
    }
}

lazy_static! {
    /// Fighter A, built once on first access.
    pub static ref BRAWLER_SHEET: CharacterSpriteSheet = build_sheet(&Brawler);
    /// Fighter B, built once on first access.
    pub static ref DUELIST_SHEET: CharacterSpriteSheet = build_sheet(&Duelist);
}
