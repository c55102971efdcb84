//! Fighter B: dark hair, pale shirt with rope belt, lightning weapons.

use super::{Fighter, FighterPalette};
use crate::animation::Action;
use crate::color::Color;
use crate::draw::{fill_rect, set_pixel, snap};
use crate::frame::Frame;
use crate::pose::ArmPosition::{Back as ArmBack, Down, Forward as ArmForward, Up};
use crate::pose::LegPosition::{Air, Back as LegBack, Forward as LegForward, Neutral};
use crate::pose::{ArmPosition, LegPosition, PoseConfig, Side, TorsoLean, Weapon};
use std::f64::consts::TAU;

const SHIRT: Color = Color::rgb(0x9a, 0xa8, 0xff);
const ROPE: Color = Color::rgb(0x9b, 0x6a, 0xd9);
const PANTS: Color = Color::rgb(0x3c, 0x4d, 0x92);
const HAIR: Color = Color::rgb(0x18, 0x18, 0x36);
const LIGHTNING: Color = Color::rgb(0x9f, 0xe1, 0xff);
const METAL: Color = Color::rgb(0xd0, 0xd7, 0xe4);

const PALETTE: FighterPalette = FighterPalette {
    outline: Color::rgb(0x1a, 0x1a, 0x28),
    hair: HAIR,
    skin: Color::rgb(0xf2, 0xcd, 0xb3),
    eye: Color::rgb(0x1a, 0x1a, 0x1a),
    headband: None,
    burst: LIGHTNING,
    aura: [155, 106, 217],
};

/// Center of the weapon starburst. Fixed: it does not follow the head tilt.
const WEAPON_CENTER: (f64, f64) = (17.0, 16.0);

/// How a weapon is stamped near the active hand.
struct WeaponStyle {
    /// Number of evenly spaced starburst samples
    samples: u32,
    /// Sample `i` lies at `base_radius + i % radius_cycle`
    base_radius: u32,
    radius_cycle: u32,
    rgb: [u8; 3],
    /// Solid block `(x, y, w, h)`; `y` is relative to the head offset
    block: (i32, i32, i32, i32),
    block_color: Color,
}

const LIGHTNING_BLADE: WeaponStyle = WeaponStyle {
    samples: 16,
    base_radius: 4,
    radius_cycle: 5,
    rgb: [159, 225, 255],
    block: (16, 14, 3, 3),
    block_color: LIGHTNING,
};

const KUNAI: WeaponStyle = WeaponStyle {
    samples: 8,
    base_radius: 3,
    radius_cycle: 2,
    rgb: [208, 215, 228],
    block: (16, 15, 3, 1),
    block_color: METAL,
};

const IDLE: [PoseConfig; 2] = [
    PoseConfig::new(Down, Down, Neutral, Neutral),
    PoseConfig::new(ArmForward, ArmBack, LegForward, LegBack).tilt(1),
];

const RUN: [PoseConfig; 4] = [
    PoseConfig::new(ArmForward, ArmBack, LegForward, LegBack).lean(TorsoLean::Forward),
    PoseConfig::new(ArmBack, ArmForward, LegBack, LegForward).lean(TorsoLean::Forward),
    PoseConfig::new(ArmForward, ArmBack, LegForward, Air).lean(TorsoLean::Forward),
    PoseConfig::new(ArmBack, ArmForward, Air, LegForward).lean(TorsoLean::Forward),
];

const JUMP: [PoseConfig; 1] =
    [PoseConfig::new(ArmForward, ArmForward, Air, Air).lean(TorsoLean::Forward)];

const FALL: [PoseConfig; 1] =
    [PoseConfig::new(ArmForward, ArmForward, Air, Air).lean(TorsoLean::Back)];

const ATTACK: [PoseConfig; 2] = [
    PoseConfig::new(ArmForward, ArmForward, LegForward, LegBack)
        .lean(TorsoLean::Forward)
        .weapon(Weapon::Kunai),
    PoseConfig::new(ArmForward, ArmForward, LegForward, LegBack)
        .lean(TorsoLean::Forward)
        .weapon(Weapon::Kunai),
];

const SPECIAL: [PoseConfig; 2] = [
    PoseConfig::new(ArmForward, ArmForward, Neutral, Neutral)
        .lean(TorsoLean::Forward)
        .weapon(Weapon::LightningBlade)
        .aura(),
    PoseConfig::new(ArmForward, ArmForward, Neutral, Neutral)
        .lean(TorsoLean::Forward)
        .weapon(Weapon::LightningBlade)
        .aura()
        .tilt(1),
];

const HIT: [PoseConfig; 1] = [PoseConfig::new(Up, ArmBack, LegBack, LegForward)
    .lean(TorsoLean::Back)
    .tilt(-1)];

const KO: [PoseConfig; 1] = [PoseConfig::new(ArmForward, ArmForward, Neutral, Neutral)
    .lean(TorsoLean::Back)
    .tilt(-2)];

/// Fighter B.
#[derive(Debug, Clone, Copy, Default)]
pub struct Duelist;

impl Fighter for Duelist {
    fn name(&self) -> &'static str {
        "duelist"
    }

    fn palette(&self) -> &FighterPalette {
        &PALETTE
    }

    fn aura_step_degrees(&self) -> usize {
        24
    }

    fn paint_torso(&self, frame: &mut Frame, lean: i32, head: i32) {
        fill_rect(frame, 8 + lean, 11 + head, 8, 5, SHIRT);
        fill_rect(frame, 8 + lean, 16 + head, 8, 5, ROPE);
        fill_rect(frame, 7 + lean, 21 + head, 10, 3, PANTS);
    }

    fn paint_arm(&self, frame: &mut Frame, side: Side, position: ArmPosition, head: i32) {
        let x = if side.is_left() { 7 } else { 17 };
        let dir = side.dir();
        match position {
            ArmPosition::Down => {
                let x = if side.is_left() { x - 1 } else { x };
                fill_rect(frame, x, 12 + head, 3, 6, SHIRT);
            }
            ArmPosition::Forward => {
                fill_rect(frame, x - 2 * dir, 12 + head, 4, 3, SHIRT);
                fill_rect(frame, x - 2 * dir, 14 + head, 3, 2, SHIRT);
            }
            ArmPosition::Up => fill_rect(frame, x - dir, 10 + head, 3, 5, SHIRT),
            ArmPosition::Back => fill_rect(frame, x + dir, 12 + head, 2, 4, SHIRT),
        }
    }

    fn paint_leg(&self, frame: &mut Frame, side: Side, position: LegPosition, head: i32) {
        let x = if side.is_left() { 9 } else { 15 };
        let inner = i32::from(side.is_left());
        // feet share the hair color
        match position {
            LegPosition::Neutral => {
                fill_rect(frame, x, 20 + head, 3, 4, PANTS);
                fill_rect(frame, x, 23 + head, 3, 1, HAIR);
            }
            LegPosition::Forward => {
                fill_rect(frame, x - inner, 20 + head, 3, 4, PANTS);
                fill_rect(frame, x - inner, 23 + head, 3, 1, HAIR);
            }
            LegPosition::Back => {
                fill_rect(frame, x + inner, 19 + head, 3, 5, PANTS);
                fill_rect(frame, x + inner, 23 + head, 3, 1, HAIR);
            }
            LegPosition::Air => {
                fill_rect(frame, x - 1, 18 + head, 4, 3, PANTS);
                fill_rect(frame, x, 21 + head, 3, 2, PANTS);
                fill_rect(frame, x, 23 + head, 3, 1, HAIR);
            }
        }
    }

    fn paint_weapon(&self, frame: &mut Frame, pose: &PoseConfig, head: i32) -> bool {
        let style = match pose.weapon {
            Some(Weapon::LightningBlade) => &LIGHTNING_BLADE,
            Some(Weapon::Kunai) => &KUNAI,
            None => return false,
        };
        paint_starburst(frame, style);
        let (x, y, w, h) = style.block;
        fill_rect(frame, x, y + head, w, h, style.block_color);
        true
    }

    fn poses(&self, action: Action) -> &'static [PoseConfig] {
        match action {
            Action::Idle => &IDLE,
            Action::Run => &RUN,
            Action::Jump => &JUMP,
            Action::Fall => &FALL,
            Action::Attack => &ATTACK,
            Action::Special => &SPECIAL,
            Action::Hit => &HIT,
            Action::Ko => &KO,
        }
    }

    fn frame_duration_ms(&self, action: Action) -> u32 {
        match action {
            Action::Idle => 250,
            Action::Run => 90,
            Action::Jump | Action::Fall => 120,
            Action::Attack => 90,
            Action::Special => 110,
            Action::Hit => 120,
            Action::Ko => 160,
        }
    }
}

/// Alpha-decaying sparks spiralling around the weapon hand.
fn paint_starburst(frame: &mut Frame, style: &WeaponStyle) {
    let [r, g, b] = style.rgb;
    let (cx, cy) = WEAPON_CENTER;
    for i in 0..style.samples {
        let angle = f64::from(i) / f64::from(style.samples) * TAU;
        let radius = f64::from(style.base_radius + i % style.radius_cycle);
        let x = snap(cx + angle.cos() * radius);
        let y = snap(cy + angle.sin() * radius);
        // tiers 0.30, 0.50, 0.70
        let hundredths = 30 + (i % 3) * 20;
        set_pixel(frame, x, y, Color::rgba(r, g, b, hundredths as u8));
    }
}
