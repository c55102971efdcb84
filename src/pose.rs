//! Declarative pose configuration for character frames
//!
//! A [`PoseConfig`] describes one frame's body state. Every field is a closed
//! enumeration, so generators match exhaustively and impossible poses cannot
//! be written down. Pose tables are `const` arrays built with the builder
//! methods below.

use serde::Serialize;
use std::fmt;

/// Arm placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmPosition {
    /// Hanging at the side
    Down,
    /// Extended toward the front
    Forward,
    /// Raised above the shoulder
    Up,
    /// Drawn back behind the torso
    Back,
}

/// Leg placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegPosition {
    Neutral,
    Forward,
    Back,
    /// Tucked up mid-jump
    Air,
}

/// Horizontal torso lean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TorsoLean {
    Forward,
    Back,
    #[default]
    Neutral,
}

impl TorsoLean {
    /// Pixel shift applied to the torso.
    pub const fn offset(self) -> i32 {
        match self {
            TorsoLean::Forward => 1,
            TorsoLean::Back => -1,
            TorsoLean::Neutral => 0,
        }
    }
}

/// Energy weapons held in the active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    Kunai,
    LightningBlade,
}

/// Which side of the body a limb belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Outward direction: -1 for left, +1 for right.
    pub const fn dir(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    pub const fn is_left(self) -> bool {
        matches!(self, Side::Left)
    }
}

/// One frame's body configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PoseConfig {
    pub arm_left: ArmPosition,
    pub arm_right: ArmPosition,
    pub leg_left: LegPosition,
    pub leg_right: LegPosition,
    pub torso_lean: TorsoLean,
    pub chakra_burst: bool,
    pub special_aura: bool,
    pub weapon: Option<Weapon>,
    /// Vertical shift of the whole figure, positive is down.
    pub head_tilt: i32,
}

impl PoseConfig {
    /// A pose with the given limbs and every optional field at its default.
    pub const fn new(
        arm_left: ArmPosition,
        arm_right: ArmPosition,
        leg_left: LegPosition,
        leg_right: LegPosition,
    ) -> Self {
        Self {
            arm_left,
            arm_right,
            leg_left,
            leg_right,
            torso_lean: TorsoLean::Neutral,
            chakra_burst: false,
            special_aura: false,
            weapon: None,
            head_tilt: 0,
        }
    }

    pub const fn lean(self, torso_lean: TorsoLean) -> Self {
        Self { torso_lean, ..self }
    }

    pub const fn burst(self) -> Self {
        Self {
            chakra_burst: true,
            ..self
        }
    }

    pub const fn aura(self) -> Self {
        Self {
            special_aura: true,
            ..self
        }
    }

    pub const fn weapon(self, weapon: Weapon) -> Self {
        Self {
            weapon: Some(weapon),
            ..self
        }
    }

    pub const fn tilt(self, head_tilt: i32) -> Self {
        Self { head_tilt, ..self }
    }

    pub const fn arm(&self, side: Side) -> ArmPosition {
        match side {
            Side::Left => self.arm_left,
            Side::Right => self.arm_right,
        }
    }

    pub const fn leg(&self, side: Side) -> LegPosition {
        match side {
            Side::Left => self.leg_left,
            Side::Right => self.leg_right,
        }
    }
}

impl fmt::Display for PoseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arms {:?}/{:?}, legs {:?}/{:?}, lean {:?}",
            self.arm_left, self.arm_right, self.leg_left, self.leg_right, self.torso_lean
        )?;
        if self.head_tilt != 0 {
            write!(f, ", tilt {}", self.head_tilt)?;
        }
        if self.chakra_burst {
            write!(f, ", burst")?;
        }
        if self.special_aura {
            write!(f, ", aura")?;
        }
        if let Some(weapon) = self.weapon {
            write!(f, ", {:?}", weapon)?;
        }
        Ok(())
    }
}
