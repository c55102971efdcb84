//! Fighter A: orange jumpsuit, spiky blond hair, chakra bursts.

use super::{Fighter, FighterPalette};
use crate::animation::Action;
use crate::color::Color;
use crate::draw::fill_rect;
use crate::frame::Frame;
use crate::pose::ArmPosition::{Back as ArmBack, Down, Forward as ArmForward, Up};
use crate::pose::LegPosition::{Air, Back as LegBack, Forward as LegForward, Neutral};
use crate::pose::{ArmPosition, LegPosition, PoseConfig, Side, TorsoLean};

const JACKET_ORANGE: Color = Color::rgb(0xf4, 0x79, 0x20);
const JACKET_BLACK: Color = Color::rgb(0x1e, 0x1e, 0x2f);
const BLUE: Color = Color::rgb(0x32, 0x50, 0xa4);
const METAL: Color = Color::rgb(0xd0, 0xd7, 0xe4);

const PALETTE: FighterPalette = FighterPalette {
    outline: Color::rgb(0x14, 0x12, 0x14),
    hair: Color::rgb(0xf7, 0xc9, 0x48),
    skin: Color::rgb(0xf9, 0xd0, 0xaa),
    eye: Color::rgb(0x1a, 0x1a, 0x1a),
    headband: Some(METAL),
    burst: Color::rgb(0x66, 0xe0, 0xff),
    aura: [102, 224, 255],
};

const IDLE: [PoseConfig; 2] = [
    PoseConfig::new(Down, Down, Neutral, Neutral),
    PoseConfig::new(ArmForward, ArmBack, LegForward, LegBack).tilt(1),
];

const RUN: [PoseConfig; 4] = [
    PoseConfig::new(ArmForward, ArmBack, LegForward, LegBack).lean(TorsoLean::Forward),
    PoseConfig::new(ArmBack, ArmForward, LegBack, LegForward).lean(TorsoLean::Forward),
    PoseConfig::new(ArmForward, ArmBack, Air, LegForward).lean(TorsoLean::Forward),
    PoseConfig::new(ArmBack, ArmForward, LegForward, Air).lean(TorsoLean::Forward),
];

const JUMP: [PoseConfig; 1] =
    [PoseConfig::new(ArmForward, ArmForward, Air, Air).lean(TorsoLean::Forward)];

const FALL: [PoseConfig; 1] =
    [PoseConfig::new(ArmForward, ArmForward, Air, Air).lean(TorsoLean::Back)];

const ATTACK: [PoseConfig; 2] = [
    PoseConfig::new(ArmForward, ArmForward, LegForward, LegBack)
        .lean(TorsoLean::Forward)
        .burst(),
    PoseConfig::new(ArmForward, ArmForward, LegForward, LegBack)
        .lean(TorsoLean::Forward)
        .burst()
        .aura(),
];

const SPECIAL: [PoseConfig; 2] = [
    PoseConfig::new(ArmForward, ArmForward, Neutral, Neutral)
        .lean(TorsoLean::Forward)
        .burst()
        .aura(),
    PoseConfig::new(Up, ArmForward, Neutral, Neutral)
        .lean(TorsoLean::Forward)
        .burst()
        .aura(),
];

const HIT: [PoseConfig; 1] = [PoseConfig::new(Up, ArmBack, LegBack, LegForward)
    .lean(TorsoLean::Back)
    .tilt(-1)];

const KO: [PoseConfig; 1] = [PoseConfig::new(ArmForward, ArmForward, Neutral, Neutral)
    .lean(TorsoLean::Back)
    .tilt(-2)];

/// Fighter A.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brawler;

impl Fighter for Brawler {
    fn name(&self) -> &'static str {
        "brawler"
    }

    fn palette(&self) -> &FighterPalette {
        &PALETTE
    }

    fn aura_step_degrees(&self) -> usize {
        20
    }

    fn paint_torso(&self, frame: &mut Frame, lean: i32, head: i32) {
        fill_rect(frame, 9 + lean, 11 + head, 6, 5, JACKET_BLACK);
        fill_rect(frame, 9 + lean, 16 + head, 6, 6, JACKET_ORANGE);
        // belt
        fill_rect(frame, 9 + lean, 16 + head, 6, 1, BLUE);
    }

    fn paint_arm(&self, frame: &mut Frame, side: Side, position: ArmPosition, head: i32) {
        let x = if side.is_left() { 7 } else { 15 };
        let dir = side.dir();
        match position {
            ArmPosition::Down => fill_rect(frame, x, 12 + head, 2, 6, JACKET_ORANGE),
            ArmPosition::Forward => {
                fill_rect(frame, x - dir, 12 + head, 3, 3, JACKET_ORANGE);
                fill_rect(frame, x - 2 * dir, 14 + head, 3, 2, JACKET_ORANGE);
            }
            ArmPosition::Up => {
                fill_rect(frame, x, 10 + head, 2, 5, JACKET_ORANGE);
                fill_rect(frame, x - dir, 9 + head, 2, 2, JACKET_ORANGE);
            }
            ArmPosition::Back => fill_rect(frame, x + dir, 12 + head, 2, 4, JACKET_ORANGE),
        }
    }

    fn paint_leg(&self, frame: &mut Frame, side: Side, position: LegPosition, head: i32) {
        let x = if side.is_left() { 10 } else { 14 };
        let inner = i32::from(side.is_left());
        match position {
            LegPosition::Neutral => {
                fill_rect(frame, x, 19 + head, 2, 5, BLUE);
                fill_rect(frame, x, 23 + head, 2, 1, METAL);
            }
            LegPosition::Forward => {
                fill_rect(frame, x - inner, 20 + head, 3, 4, BLUE);
                fill_rect(frame, x - inner, 23 + head, 3, 1, METAL);
            }
            LegPosition::Back => {
                fill_rect(frame, x + inner, 19 + head, 2, 5, BLUE);
                fill_rect(frame, x + inner, 23 + head, 2, 1, METAL);
            }
            LegPosition::Air => {
                fill_rect(frame, x - 1, 18 + head, 3, 3, BLUE);
                fill_rect(frame, x, 21 + head, 3, 2, BLUE);
                fill_rect(frame, x, 23 + head, 3, 1, METAL);
            }
        }
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
            Action::Attack => 80,
            Action::Special => 120,
            Action::Hit => 120,
            Action::Ko => 160,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::draw_pose;

    const STANDING: PoseConfig = PoseConfig::new(Down, Down, Neutral, Neutral);

    #[test]
    fn test_standing_torso_layers() {
        let frame = draw_pose(&Brawler, &STANDING);
        assert_eq!(frame.get(12, 12), Some(JACKET_BLACK));
        assert_eq!(frame.get(12, 16), Some(BLUE)); // belt over jacket
        assert_eq!(frame.get(12, 17), Some(JACKET_ORANGE));
    }

    #[test]
    fn test_lean_shifts_torso_only() {
        let frame = draw_pose(&Brawler, &STANDING.lean(TorsoLean::Forward));
        assert_eq!(frame.get(15, 11), Some(JACKET_BLACK));
        // left arm stays put
        assert_eq!(frame.get(7, 13), Some(JACKET_ORANGE));

        let back = draw_pose(&Brawler, &STANDING.lean(TorsoLean::Back));
        assert_eq!(back.get(8, 11), Some(JACKET_BLACK));
    }

    #[test]
    fn test_lowered_arms_mirror() {
        let frame = draw_pose(&Brawler, &STANDING);
        for y in 12..18 {
            assert_eq!(frame.get(7, y), Some(JACKET_ORANGE));
            assert_eq!(frame.get(16, y), Some(JACKET_ORANGE));
        }
    }

    #[test]
    fn test_forward_arm_projects_toward_center() {
        let pose = PoseConfig::new(ArmForward, Down, Neutral, Neutral);
        let frame = draw_pose(&Brawler, &pose);
        // second rect of the left arm starts at x = 7 + 2
        assert_eq!(frame.get(11, 15), Some(JACKET_ORANGE));
    }

    #[test]
    fn test_raised_arm_has_shoulder_cap() {
        let pose = PoseConfig::new(Up, Down, Neutral, Neutral);
        let frame = draw_pose(&Brawler, &pose);
        assert_eq!(frame.get(8, 9), Some(JACKET_ORANGE));
        assert_eq!(frame.get(7, 10), Some(JACKET_ORANGE));
    }

    #[test]
    fn test_neutral_feet() {
        let frame = draw_pose(&Brawler, &STANDING);
        assert_eq!(frame.get(10, 23), Some(METAL));
        assert_eq!(frame.get(15, 23), Some(METAL));
        assert_eq!(frame.get(10, 20), Some(BLUE));
    }

    #[test]
    fn test_airborne_legs_tuck_up() {
        let pose = PoseConfig::new(Down, Down, Air, Air);
        let frame = draw_pose(&Brawler, &pose);
        assert_eq!(frame.get(9, 18), Some(BLUE));
        assert_eq!(frame.get(16, 23), Some(METAL));
    }

    #[test]
    fn test_ko_pose_clips_at_top() {
        // tilt -2 pushes the hair to row 0; nothing panics and the frame stays 24x24
        let frame = draw_pose(&Brawler, &KO[0]);
        assert_eq!(frame.dimensions(), (24, 24));
        assert_eq!(frame.get(8, 0), Some(PALETTE.hair));
    }
}
