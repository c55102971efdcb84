//! Lookup of every built-in sheet by name
//!
//! Character sheets hold one animation per [`Action`]; effect sheets hold a
//! single animation labelled with the effect's own name.

use crate::animation::{Action, Animation};
use crate::characters::Archetype;
use crate::effects::Effect;
use crate::frame::FrameClass;
use crate::output::{animation_output_path, effect_output_path};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A character or effect sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    Character(Archetype),
    Effect(Effect),
}

/// One animation of a sheet, with the label used in file names and JSON.
#[derive(Debug, Clone, Copy)]
pub struct SheetAnimation {
    pub sheet: SheetId,
    pub action: Option<Action>,
    pub animation: &'static Animation,
}

impl SheetAnimation {
    /// Action name for characters, effect name for effects.
    pub fn label(&self) -> &'static str {
        match self.action {
            Some(action) => action.name(),
            None => self.sheet.name(),
        }
    }

    /// Where this animation's strip goes inside `dir`.
    pub fn output_path(&self, dir: &Path, ext: &str) -> PathBuf {
        match self.action {
            Some(action) => animation_output_path(dir, self.sheet.name(), action.name(), ext),
            None => effect_output_path(dir, self.sheet.name(), ext),
        }
    }
}

impl SheetId {
    pub const ALL: [SheetId; 5] = [
        SheetId::Character(Archetype::Brawler),
        SheetId::Character(Archetype::Duelist),
        SheetId::Effect(Effect::ChakraSphere),
        SheetId::Effect(Effect::LightningBlade),
        SheetId::Effect(Effect::Impact),
    ];

    pub fn name(self) -> &'static str {
        match self {
            SheetId::Character(archetype) => archetype.name(),
            SheetId::Effect(effect) => effect.name(),
        }
    }

    pub fn frame_class(self) -> FrameClass {
        match self {
            SheetId::Character(_) => FrameClass::Character,
            SheetId::Effect(_) => FrameClass::Effect,
        }
    }

    /// Every animation of the sheet, in canonical order.
    pub fn animations(self) -> Vec<SheetAnimation> {
        match self {
            SheetId::Character(archetype) => archetype
                .sheet()
                .iter()
                .map(|(action, animation)| SheetAnimation {
                    sheet: self,
                    action: Some(action),
                    animation,
                })
                .collect(),
            SheetId::Effect(effect) => vec![SheetAnimation {
                sheet: self,
                action: None,
                animation: &effect.sheet().animation,
            }],
        }
    }

    /// Pick one animation: the named action for characters (idle when
    /// omitted), the only animation for effects.
    pub fn animation(self, action: Option<Action>) -> Result<SheetAnimation, String> {
        match (self, action) {
            (SheetId::Character(archetype), action) => {
                let action = action.unwrap_or(Action::Idle);
                Ok(SheetAnimation {
                    sheet: self,
                    action: Some(action),
                    animation: archetype.sheet().get(action),
                })
            }
            (SheetId::Effect(effect), None) => Ok(SheetAnimation {
                sheet: self,
                action: None,
                animation: &effect.sheet().animation,
            }),
            (SheetId::Effect(effect), Some(action)) => Err(format!(
                "effect '{}' has no '{}' animation",
                effect, action
            )),
        }
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SheetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(archetype) = s.parse::<Archetype>() {
            return Ok(SheetId::Character(archetype));
        }
        if let Ok(effect) = s.parse::<Effect>() {
            return Ok(SheetId::Effect(effect));
        }
        let known: Vec<&str> = SheetId::ALL.iter().map(|id| id.name()).collect();
        Err(format!("unknown sheet '{}' (expected one of: {})", s, known.join(", ")))
    }
}
