//! Technique and hit-effect frame generation.
//!
//! Effects use a pre-computed frame model: each generator paints a short,
//! fixed sequence of 32x32 frames from the drawing primitives, with no pose
//! input. Frame `i` of a sequence varies a radius, angle or alpha as a pure
//! function of `i`, so sequences are reproducible.
//!
//! | Effect | Frames | Timing |
//! |--------|--------|--------|
//! | chakra sphere | 6 | 60 ms |
//! | lightning blade | 6 | 60 ms |
//! | impact spark | 4 | 50 ms |

use crate::animation::{Animation, EffectSpriteSheet};
use crate::color::Color;
use crate::draw::{apply_glow, fill_disc, set_pixel, snap};
use crate::frame::{Frame, FrameClass};
use lazy_static::lazy_static;
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

/// Every effect is centered in its frame.
const CENTER: i32 = 16;

const SPHERE_INNER: [u8; 3] = [51, 196, 255];
const SPHERE_MID: [u8; 3] = [94, 214, 255];
const SPHERE_OUTER: [u8; 3] = [162, 240, 255];

const LIGHTNING: [u8; 3] = [159, 225, 255];
const LIGHTNING_SPIKES: u32 = 12;

const SPARK: [u8; 3] = [255, 180, 122];

fn tint(rgb: [u8; 3], hundredths: u8) -> Color {
    let [r, g, b] = rgb;
    Color::rgba(r, g, b, hundredths)
}

/// Churning energy orb: layered glows under two discs whose radius
/// alternates by one pixel each frame.
pub fn chakra_sphere_frames() -> Vec<Frame> {
    (0..6)
        .map(|i| {
            let mut frame = Frame::blank(FrameClass::Effect);
            let radius = 6 + i % 2;
            apply_glow(&mut frame, CENTER, CENTER, radius + 4, SPHERE_OUTER, 0.45);
            apply_glow(&mut frame, CENTER, CENTER, radius + 2, SPHERE_MID, 0.6);
            fill_disc(&mut frame, CENTER, CENTER, radius, tint(SPHERE_INNER, 95));
            fill_disc(&mut frame, CENTER, CENTER, (radius - 2).max(2), tint(SPHERE_MID, 75));
            frame
        })
        .collect()
}

/// Crackling lightning: one soft glow plus twelve rays whose angles rotate
/// by pi/8 per frame. Ray pixels fade linearly with distance.
pub fn lightning_blade_frames() -> Vec<Frame> {
    (0..6u32)
        .map(|i| {
            let mut frame = Frame::blank(FrameClass::Effect);
            apply_glow(&mut frame, CENTER, CENTER, 12, LIGHTNING, 0.4);
            for s in 0..LIGHTNING_SPIKES {
                let angle =
                    TAU * f64::from(s) / f64::from(LIGHTNING_SPIKES) + f64::from(i) * PI / 8.0;
                let length = 10 + (s + i) % 3;
                for d in 0..length {
                    let x = snap(f64::from(CENTER) + angle.cos() * f64::from(d));
                    let y = snap(f64::from(CENTER) + angle.sin() * f64::from(d));
                    // 0.90 at the center, minus 0.07 per pixel
                    set_pixel(&mut frame, x, y, tint(LIGHTNING, (90 - 7 * d) as u8));
                }
            }
            frame
        })
        .collect()
}

/// Expanding hit flash: the ring grows two pixels per frame while fading.
pub fn impact_frames() -> Vec<Frame> {
    (0..4)
        .map(|i| {
            let mut frame = Frame::blank(FrameClass::Effect);
            let radius = 4 + i * 2;
            apply_glow(&mut frame, CENTER, CENTER, radius + 1, SPARK, 0.5);
            fill_disc(&mut frame, CENTER, CENTER, radius, tint(SPARK, (70 - 10 * i) as u8));
            frame
        })
        .collect()
}

/// The three effect sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    ChakraSphere,
    LightningBlade,
    Impact,
}

impl Effect {
    pub const ALL: [Effect; 3] = [Effect::ChakraSphere, Effect::LightningBlade, Effect::Impact];

    pub const fn name(self) -> &'static str {
        match self {
            Effect::ChakraSphere => "chakra_sphere",
            Effect::LightningBlade => "lightning_blade",
            Effect::Impact => "impact",
        }
    }

    pub const fn frame_duration_ms(self) -> u32 {
        match self {
            Effect::ChakraSphere | Effect::LightningBlade => 60,
            Effect::Impact => 50,
        }
    }

    /// Paint this effect's frames from scratch.
    pub fn frames(self) -> Vec<Frame> {
        match self {
            Effect::ChakraSphere => chakra_sphere_frames(),
            Effect::LightningBlade => lightning_blade_frames(),
            Effect::Impact => impact_frames(),
        }
    }

    /// Build a fresh sheet. Prefer [`Effect::sheet`] for the shared copy.
    pub fn build_sheet(self) -> EffectSpriteSheet {
        let sheet = EffectSpriteSheet::new(
            self.name(),
            Animation::new(self.frames(), self.frame_duration_ms()),
        );
        log::debug!("built '{}' effect ({} frames)", sheet.name, sheet.animation.len());
        sheet
    }

    /// The shared, lazily built sheet.
    pub fn sheet(self) -> &'static EffectSpriteSheet {
        match self {
            Effect::ChakraSphere => &CHAKRA_SPHERE,
            Effect::LightningBlade => &LIGHTNING_BLADE,
            Effect::Impact => &IMPACT_SPARK,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase().replace('-', "_");
        Effect::ALL
            .into_iter()
            .find(|e| e.name() == lowered)
            .ok_or_else(|| format!("unknown effect '{}'", s))
    }
}

lazy_static! {
    pub static ref CHAKRA_SPHERE: EffectSpriteSheet = Effect::ChakraSphere.build_sheet();
    pub static ref LIGHTNING_BLADE: EffectSpriteSheet = Effect::LightningBlade.build_sheet();
    pub static ref IMPACT_SPARK: EffectSpriteSheet = Effect::Impact.build_sheet();
}
